//! Read-only dictionary
//!
//! The corpus is both the pool secret words are drawn from and the membership
//! test for submitted attempts.

use super::loader::{load_from_file, words_from_slice};
use super::WORDS;
use crate::core::Word;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for building a corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("word list contains no valid five-letter words")]
    Empty,
    #[error("failed to read word list {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Immutable, non-empty set of dictionary words
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    lookup: FxHashSet<String>,
}

impl Corpus {
    /// Build a corpus, dropping duplicate words
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, CorpusError> {
        let mut lookup = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|w| lookup.insert(w.text().to_string()))
            .collect();

        if words.is_empty() {
            return Err(CorpusError::Empty);
        }

        Ok(Self { words, lookup })
    }

    /// The dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns `CorpusError::Empty` if the embedded list has no valid words.
    pub fn builtin() -> Result<Self, CorpusError> {
        Self::new(words_from_slice(WORDS))
    }

    /// Load a corpus from a file with one word per line
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or holds no valid words.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let words = load_from_file(path).map_err(|source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(words)
    }

    /// Case-insensitive membership test
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.lookup.contains(word.text())
    }

    /// Draw one word uniformly at random
    pub fn draw<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never `true` for a constructed corpus
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
