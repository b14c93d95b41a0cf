//! Word Puzzle
//!
//! A single-player word-guessing game: find the hidden five-letter word in a
//! fixed number of attempts, guided by per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_puzzle::core::Word;
//! use wordle_puzzle::engine::{GameConfig, GameStatus, PuzzleEngine, Submission};
//! use wordle_puzzle::wordlists::Corpus;
//!
//! let corpus = Corpus::builtin().unwrap();
//! let secret = Word::new("crane").unwrap();
//! let mut game = PuzzleEngine::with_secret(&corpus, &GameConfig::default(), secret).unwrap();
//!
//! for ch in "crane".chars() {
//!     game.place_letter(ch);
//! }
//! assert_eq!(game.submit_attempt(), Submission::Accepted(GameStatus::Won));
//! ```

// Core domain types
pub mod core;

// Game state machine and session
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
