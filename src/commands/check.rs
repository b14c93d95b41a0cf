//! Feedback check command
//!
//! Scores a single guess against a given secret with the same per-letter rule
//! the game uses.

use crate::core::{Feedback, WIDTH, Word, WordError};

/// Result of checking one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: [Feedback; WIDTH],
}

impl CheckResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.iter().all(|&f| f == Feedback::Correct)
    }
}

/// Score `guess` against `secret`
///
/// Neither word needs to be in the dictionary.
///
/// # Errors
///
/// Returns `WordError` if either word is not five letters from the alphabet.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = Feedback::evaluate_row(&secret, guess.letters());

    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}
