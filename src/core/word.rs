//! Puzzle word representation
//!
//! A Word stores a five-letter word, uppercased, along with a letter index for
//! fast membership checks during feedback calculation.

use super::alphabet::Letter;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Number of letters in every word and grid row
pub const WIDTH: usize = 5;

/// A five-letter puzzle word with a letter set for membership checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: [Letter; WIDTH],
    letter_set: FxHashSet<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word contains invalid character {0:?}")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive; the stored form is uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains characters outside the input alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_puzzle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        let count = text.chars().count();
        if count != WIDTH {
            return Err(WordError::InvalidLength(count));
        }

        let mut letters = Vec::with_capacity(WIDTH);
        for ch in text.chars() {
            letters.push(Letter::new(ch).ok_or(WordError::InvalidCharacter(ch))?);
        }

        let letters: [Letter; WIDTH] = letters
            .try_into()
            .map_err(|rest: Vec<Letter>| WordError::InvalidLength(rest.len()))?;

        Ok(Self::from_letters(letters))
    }

    /// Build a word from already-validated letters
    #[must_use]
    pub fn from_letters(letters: [Letter; WIDTH]) -> Self {
        let text = letters.iter().copied().map(Letter::as_char).collect();

        let letter_set = letters.iter().copied().collect();

        Self {
            text,
            letters,
            letter_set,
        }
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the letters in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WIDTH] {
        &self.letters
    }

    /// Get the letter at a position, or `None` past the end of the word
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<Letter> {
        self.letters.get(position).copied()
    }

    /// Check if the word contains a letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letter_set.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
