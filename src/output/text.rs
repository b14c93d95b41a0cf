//! Player-facing text shared by the front ends

use crate::engine::{GameStatus, Rejection};

pub const PLAY_AGAIN: &str = "Play again";

/// End-of-game headline
#[must_use]
pub const fn outcome_headline(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Won => "You won!",
        GameStatus::Lost => "You lost",
        GameStatus::InProgress => "",
    }
}

/// Line revealing the secret word
#[must_use]
pub fn reveal_line(word: &str) -> String {
    format!("The word was: {word}")
}

/// Explanation for a refused submission
#[must_use]
pub const fn rejection_message(rejection: Rejection) -> &'static str {
    match rejection {
        Rejection::Incomplete => "Not enough letters",
        Rejection::NotInWordList => "Not in word list",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headlines() {
        assert_eq!(outcome_headline(GameStatus::Won), "You won!");
        assert_eq!(outcome_headline(GameStatus::Lost), "You lost");
        assert!(outcome_headline(GameStatus::InProgress).is_empty());
    }

    #[test]
    fn reveal() {
        assert_eq!(reveal_line("CRANE"), "The word was: CRANE");
    }
}
