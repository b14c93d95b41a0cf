//! Display functions for the line-mode front end

use super::formatters::{create_progress_bar, empty_tile, feedback_to_emoji, letter_tile};
use super::text::{PLAY_AGAIN, outcome_headline, reveal_line};
use crate::commands::CheckResult;
use crate::core::{Feedback, WIDTH, keyboard_rows};
use crate::engine::{GameStatus, PuzzleEngine, Tally};
use colored::Colorize;

/// Print every grid row, submitted rows colored by feedback
pub fn print_grid(engine: &PuzzleEngine) {
    println!();
    for (row_index, row) in engine.grid().rows().iter().enumerate() {
        let tiles: Vec<String> = row
            .cells()
            .iter()
            .enumerate()
            .map(|(column, cell)| match cell {
                Some(letter) => {
                    letter_tile(*letter, engine.cell_feedback(row_index, column)).to_string()
                }
                None => empty_tile().to_string(),
            })
            .collect();
        println!("   {}", tiles.join(" "));
    }
    println!();
}

/// Print the keyboard with aggregate per-key hints
pub fn print_keyboard(engine: &PuzzleEngine) {
    for (indent, row) in keyboard_rows().iter().enumerate() {
        let keys: Vec<String> = row
            .iter()
            .map(|&letter| letter_tile(letter, engine.keyboard_feedback(letter)).to_string())
            .collect();
        println!("{}{}", " ".repeat(indent * 2), keys.join(""));
    }
    println!();
}

/// Print the attempts-used bar
pub fn print_progress(engine: &PuzzleEngine) {
    println!(
        "Attempts: [{}] {}/{} ({} left)",
        create_progress_bar(engine.current_attempt(), engine.tries(), engine.tries() * 2),
        engine.current_attempt(),
        engine.tries(),
        engine.remaining_attempts()
    );
}

/// Print the end-of-game banner
pub fn print_outcome(engine: &PuzzleEngine, tally: Tally) {
    let headline = outcome_headline(engine.status());
    let headline = if engine.status() == GameStatus::Won {
        headline.bright_green().bold()
    } else {
        headline.bright_red().bold()
    };

    println!("{}", "═".repeat(40).bright_cyan());
    println!("  {headline}");
    if let Some(word) = engine.revealed_word() {
        println!("  {}", reveal_line(word.text()).bright_white());
    }

    // Share-style summary of submitted rows
    for row in 0..engine.current_attempt() {
        let feedback: Vec<Feedback> = (0..WIDTH)
            .map(|col| engine.cell_feedback(row, col))
            .collect();
        println!("  {}", feedback_to_emoji(&feedback));
    }

    println!(
        "  Games: {} | Win rate: {:.0}%",
        tally.played,
        tally.win_rate()
    );
    println!("{}", "═".repeat(40).bright_cyan());
    println!("{PLAY_AGAIN}? (yes/no)");
}

/// Print the result of the check command
pub fn print_check_result(result: &CheckResult) {
    let tiles: Vec<String> = result
        .guess
        .letters()
        .iter()
        .zip(&result.feedback)
        .map(|(&letter, &feedback)| letter_tile(letter, feedback).to_string())
        .collect();

    println!("{}", tiles.join(" "));
    println!("{}", feedback_to_emoji(&result.feedback));
}
