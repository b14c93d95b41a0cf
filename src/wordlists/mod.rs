//! Word lists for the puzzle
//!
//! Provides the embedded dictionary and the [`Corpus`] built from it.

mod corpus;
mod embedded;
pub mod loader;

pub use corpus::{Corpus, CorpusError};
pub use embedded::{WORDS, WORDS_COUNT};
