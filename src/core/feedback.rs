//! Per-letter feedback
//!
//! Each letter of a submitted attempt is classified on its own, using only
//! whether the secret word has that letter at the same position or anywhere
//! at all. Repeated letters are not reduced by count: guessing `EERIE` against
//! `CRANE` marks every `E` as present, and the one at position 4 as correct.

use super::alphabet::Letter;
use super::word::{WIDTH, Word};

/// Feedback for a single cell or keyboard key
///
/// Variants are ordered by strength, so the best of several readings is their
/// maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Not submitted yet, or never tried
    #[default]
    Unknown,
    /// Letter not in the secret word
    Absent,
    /// Letter in the secret word, at another position
    Present,
    /// Letter at exactly this position
    Correct,
}

impl Feedback {
    /// Classify `letter` guessed at `position` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_puzzle::core::{Feedback, Letter, Word};
    ///
    /// let secret = Word::new("crane").unwrap();
    /// let c = Letter::new('c').unwrap();
    ///
    /// assert_eq!(Feedback::evaluate(&secret, c, 0), Feedback::Correct);
    /// assert_eq!(Feedback::evaluate(&secret, c, 3), Feedback::Present);
    /// assert_eq!(Feedback::evaluate(&secret, Letter::new('z').unwrap(), 0), Feedback::Absent);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, letter: Letter, position: usize) -> Self {
        if secret.letter_at(position) == Some(letter) {
            Self::Correct
        } else if secret.has_letter(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }

    /// Classify a whole row of letters
    #[must_use]
    pub fn evaluate_row(secret: &Word, letters: &[Letter; WIDTH]) -> [Self; WIDTH] {
        let mut row = [Self::Unknown; WIDTH];
        for (position, (slot, &letter)) in row.iter_mut().zip(letters).enumerate() {
            *slot = Self::evaluate(secret, letter, position);
        }
        row
    }

    /// Emoji square for share-style output
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unknown => '⬜',
        }
    }

    /// Single ASCII symbol: `G`, `Y`, `-` or `.`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Unknown => '.',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn letters(text: &str) -> [Letter; WIDTH] {
        *word(text).letters()
    }

    fn symbols(row: [Feedback; WIDTH]) -> String {
        row.iter().map(|f| f.symbol()).collect()
    }

    #[test]
    fn ordering_ranks_strength() {
        assert!(Feedback::Correct > Feedback::Present);
        assert!(Feedback::Present > Feedback::Absent);
        assert!(Feedback::Absent > Feedback::Unknown);
    }

    #[test]
    fn all_correct_on_exact_match() {
        let secret = word("crane");
        assert_eq!(
            Feedback::evaluate_row(&secret, &letters("crane")),
            [Feedback::Correct; WIDTH]
        );
    }

    #[test]
    fn shared_position_is_correct() {
        // CRIMP vs CRANE: C and R sit at the same positions in both words
        let secret = word("crane");
        assert_eq!(symbols(Feedback::evaluate_row(&secret, &letters("crimp"))), "GG---");
    }

    #[test]
    fn misplaced_letters_are_present() {
        let secret = word("crane");
        assert_eq!(symbols(Feedback::evaluate_row(&secret, &letters("nacre"))), "YYYYG");
    }

    #[test]
    fn duplicates_are_not_reduced_by_count() {
        // CRANE has a single E, yet every E in the guess is marked
        let secret = word("crane");
        assert_eq!(symbols(Feedback::evaluate_row(&secret, &letters("eerie"))), "YYY-G");
    }

    #[test]
    fn duplicate_in_secret_only() {
        let secret = word("speed");
        assert_eq!(symbols(Feedback::evaluate_row(&secret, &letters("crane"))), "----Y");
    }

    #[test]
    fn position_past_end_is_never_correct() {
        let secret = word("crane");
        let e = Letter::new('e').unwrap();
        assert_eq!(Feedback::evaluate(&secret, e, WIDTH), Feedback::Present);
    }

    #[test]
    fn emoji() {
        let secret = word("crane");
        let row: String = Feedback::evaluate_row(&secret, &letters("crimp"))
            .iter()
            .map(|f| f.to_emoji())
            .collect();
        assert_eq!(row, "🟩🟩⬛⬛⬛");
    }
}
