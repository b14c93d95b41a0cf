//! Puzzle engine: one game from first letter to win or loss
//!
//! The engine owns the secret word, the attempt grid and the game status.
//! Every mutating operation is guarded; input that does not apply is ignored
//! and reported through the return value rather than as an error.

use super::config::GameConfig;
use crate::core::{Feedback, Grid, Letter, Row, Word};
use crate::wordlists::Corpus;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, trace};

/// Where a game stands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `true` once the game is won or lost
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submission was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// The current row still has an empty cell
    Incomplete,
    /// The row spells a word outside the dictionary
    NotInWordList,
}

/// Result of [`PuzzleEngine::submit_attempt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Submission {
    /// The game was already over; nothing happened
    Ignored,
    /// The row was refused and the state is unchanged
    Rejected(Rejection),
    /// The row was consumed; carries the status after it
    Accepted(GameStatus),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("secret word {0} is not in the word list")]
    SecretNotInCorpus(String),
}

/// A single game instance
#[derive(Debug, Clone)]
pub struct PuzzleEngine<'a> {
    corpus: &'a Corpus,
    secret: Word,
    grid: Grid,
    attempt: usize,
    status: GameStatus,
}

impl<'a> PuzzleEngine<'a> {
    /// Start a game with a secret drawn uniformly from `corpus`
    pub fn new<R: Rng>(corpus: &'a Corpus, config: &GameConfig, rng: &mut R) -> Self {
        let secret = corpus.draw(rng).clone();
        debug!(tries = config.tries(), "new game");
        Self::start(corpus, config, secret)
    }

    /// Start a game with a chosen secret
    ///
    /// # Errors
    ///
    /// Returns `EngineError::SecretNotInCorpus` if the secret could never be
    /// guessed because the dictionary lacks it.
    pub fn with_secret(
        corpus: &'a Corpus,
        config: &GameConfig,
        secret: Word,
    ) -> Result<Self, EngineError> {
        if !corpus.contains(&secret) {
            return Err(EngineError::SecretNotInCorpus(secret.text().to_string()));
        }
        Ok(Self::start(corpus, config, secret))
    }

    fn start(corpus: &'a Corpus, config: &GameConfig, secret: Word) -> Self {
        Self {
            corpus,
            secret,
            grid: Grid::new(config.tries()),
            attempt: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Type a letter into the first empty cell of the current row
    ///
    /// Returns `true` if the grid changed. Characters outside the alphabet,
    /// a full row and a finished game all leave the grid untouched.
    pub fn place_letter(&mut self, ch: char) -> bool {
        if self.status.is_over() {
            return false;
        }
        let Some(letter) = Letter::new(ch) else {
            return false;
        };
        let attempt = self.attempt;
        let placed = self
            .grid
            .row_mut(attempt)
            .is_some_and(|row| row.push(letter));

        if placed {
            trace!(attempt, %letter, "letter placed");
        }
        placed
    }

    /// Clear the last filled cell of the current row
    ///
    /// Returns `true` if the grid changed.
    pub fn remove_letter(&mut self) -> bool {
        if self.status.is_over() {
            return false;
        }
        let attempt = self.attempt;
        let removed = self.grid.row_mut(attempt).and_then(Row::pop);

        if let Some(letter) = removed {
            trace!(attempt, %letter, "letter removed");
        }
        removed.is_some()
    }

    /// Submit the current row
    pub fn submit_attempt(&mut self) -> Submission {
        if self.status.is_over() {
            return Submission::Ignored;
        }

        let Some(guess) = self.grid.row(self.attempt).and_then(Row::word) else {
            debug!(attempt = self.attempt, "rejected incomplete attempt");
            return Submission::Rejected(Rejection::Incomplete);
        };

        if !self.corpus.contains(&guess) {
            debug!(attempt = self.attempt, %guess, "rejected word not in list");
            return Submission::Rejected(Rejection::NotInWordList);
        }

        self.attempt += 1;

        if guess == self.secret {
            self.status = GameStatus::Won;
        } else if self.attempt == self.grid.tries() {
            self.status = GameStatus::Lost;
        }

        debug!(
            attempt = self.attempt,
            %guess,
            status = ?self.status,
            "attempt accepted"
        );
        Submission::Accepted(self.status)
    }

    /// Feedback for `letter` guessed at `position`
    ///
    /// Applies the per-cell rule directly, without looking at the grid.
    #[must_use]
    pub fn letter_feedback(&self, letter: Letter, position: usize) -> Feedback {
        Feedback::evaluate(&self.secret, letter, position)
    }

    /// Feedback for one grid cell
    ///
    /// Rows that have not been submitted, and empty cells, are `Unknown`.
    #[must_use]
    pub fn cell_feedback(&self, row: usize, column: usize) -> Feedback {
        if row >= self.attempt {
            return Feedback::Unknown;
        }
        self.grid
            .cell(row, column)
            .map_or(Feedback::Unknown, |letter| {
                self.letter_feedback(letter, column)
            })
    }

    /// Aggregate hint for a keyboard key across all submitted rows
    ///
    /// The strongest reading wins: correct over present over absent. A key
    /// that never appeared in a submitted row is `Unknown`.
    #[must_use]
    pub fn keyboard_feedback(&self, letter: Letter) -> Feedback {
        self.grid.rows()[..self.attempt]
            .iter()
            .flat_map(|row| row.cells().iter().enumerate())
            .filter(|(_, cell)| **cell == Some(letter))
            .map(|(column, _)| self.letter_feedback(letter, column))
            .max()
            .unwrap_or_default()
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Index of the row currently being filled; equals `tries` when exhausted
    #[inline]
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.attempt
    }

    #[inline]
    #[must_use]
    pub fn tries(&self) -> usize {
        self.grid.tries()
    }

    #[inline]
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.grid.tries() - self.attempt
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret word, once the game is over
    #[must_use]
    pub const fn revealed_word(&self) -> Option<&Word> {
        if self.status.is_over() {
            Some(&self.secret)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }
}
