//! Input alphabet and on-screen keyboard layout

use std::fmt;

/// Letters accepted as input, lowercase
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Keyboard layout used for per-key hints, top row first
pub const KEYBOARD: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A single uppercase letter from [`ALPHABET`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from any-case input
    ///
    /// Returns `None` if the character is not part of [`ALPHABET`].
    ///
    /// # Examples
    /// ```
    /// use wordle_puzzle::core::Letter;
    ///
    /// assert_eq!(Letter::new('q'), Letter::new('Q'));
    /// assert_eq!(Letter::new('q').unwrap().as_char(), 'Q');
    /// assert!(Letter::new('1').is_none());
    /// ```
    #[must_use]
    pub fn new(ch: char) -> Option<Self> {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii() && ALPHABET.contains(lower) {
            Some(Self(lower.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Keyboard rows as letters, top row first
#[must_use]
pub fn keyboard_rows() -> Vec<Vec<Letter>> {
    KEYBOARD
        .iter()
        .map(|row| row.chars().filter_map(Letter::new).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_is_uppercased() {
        assert_eq!(Letter::new('a').unwrap().as_char(), 'A');
        assert_eq!(Letter::new('Z').unwrap().as_char(), 'Z');
    }

    #[test]
    fn letter_rejects_outside_alphabet() {
        for ch in ['1', ' ', '-', 'é', 'ж', '\n'] {
            assert!(Letter::new(ch).is_none(), "{ch:?} should be rejected");
        }
    }

    #[test]
    fn keyboard_covers_alphabet_once() {
        let mut letters: Vec<char> = keyboard_rows()
            .into_iter()
            .flatten()
            .map(Letter::as_char)
            .collect();
        letters.sort_unstable();

        let expected: Vec<char> = ALPHABET.chars().map(|c| c.to_ascii_uppercase()).collect();
        assert_eq!(letters, expected);
    }

    #[test]
    fn keyboard_has_three_rows() {
        let rows = keyboard_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 10);
        assert_eq!(rows[1].len(), 9);
        assert_eq!(rows[2].len(), 7);
    }
}
