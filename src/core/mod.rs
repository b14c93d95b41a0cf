//! Core domain types for the puzzle
//!
//! Pure value types with no I/O: letters, words, feedback and the attempt grid.

mod alphabet;
mod feedback;
mod grid;
mod word;

pub use alphabet::{ALPHABET, KEYBOARD, Letter, keyboard_rows};
pub use feedback::Feedback;
pub use grid::{Cell, Grid, Row};
pub use word::{WIDTH, Word, WordError};
