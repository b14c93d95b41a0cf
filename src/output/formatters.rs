//! Formatting utilities for terminal output

use crate::core::{Feedback, Letter};
use colored::{ColoredString, Colorize};

/// Format a feedback row as emoji string
#[must_use]
pub fn feedback_to_emoji(row: &[Feedback]) -> String {
    row.iter().map(|f| f.to_emoji()).collect()
}

/// A letter tile, colored by its feedback
#[must_use]
pub fn letter_tile(letter: Letter, feedback: Feedback) -> ColoredString {
    let tile = format!(" {letter} ");
    match feedback {
        Feedback::Correct => tile.black().on_green().bold(),
        Feedback::Present => tile.black().on_yellow().bold(),
        Feedback::Absent => tile.white().on_bright_black(),
        Feedback::Unknown => tile.bold(),
    }
}

/// Placeholder tile for an empty cell
#[must_use]
pub fn empty_tile() -> ColoredString {
    " · ".bright_black()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = (value * width).checked_div(max).unwrap_or(0).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
