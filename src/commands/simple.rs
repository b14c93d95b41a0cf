//! Simple line-mode game
//!
//! Text-based play without the TUI: one word per line.

use crate::core::WIDTH;
use crate::engine::{Input, Outcome, Session, Submission};
use crate::output::text::rejection_message;
use crate::output::{print_grid, print_keyboard, print_outcome, print_progress};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    New,
    Guess(String),
    Invalid(String),
}

impl Command {
    /// Parse one input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Self::Quit,
            "new" | "n" => Self::New,
            _ if input.chars().count() == WIDTH => Self::Guess(input.to_string()),
            _ => Self::Invalid(input.to_string()),
        }
    }
}

/// Run the simple line-mode game on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple(session: &mut Session) -> Result<()> {
    let stdin = io::stdin();
    run_with_input(session, &mut stdin.lock())
}

/// Run the line-mode game reading player lines from `input`
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_with_input<R: BufRead>(session: &mut Session, input: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║         Word Puzzle - Line Mode      ║");
    println!("╚══════════════════════════════════════╝\n");
    println!(
        "Guess the {WIDTH}-letter word in {} tries.",
        session.engine().tries()
    );
    println!("Commands: 'quit' to exit, 'new' for a new game once this one is over\n");

    print_grid(session.engine());

    loop {
        if session.engine().status().is_over() {
            print_outcome(session.engine(), session.tally());
            match read_line("Play again", input)?.as_deref().map(str::to_lowercase) {
                Some(answer) if matches!(answer.as_str(), "yes" | "y" | "new") => {
                    session.handle(Input::Restart, Instant::now());
                    println!("\n🔄 New game started!");
                    print_grid(session.engine());
                    continue;
                }
                _ => break,
            }
        }

        let prompt = format!("Guess {}", session.engine().current_attempt() + 1);
        let Some(line) = read_line(&prompt, input)? else {
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::New => println!("Finish this game first."),
            Command::Invalid(text) => {
                println!("❌ '{text}' is not a {WIDTH}-letter guess");
            }
            Command::Guess(word) => play_guess(session, &word),
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Type a whole word into the current row and submit it
fn play_guess(session: &mut Session, word: &str) {
    let now = Instant::now();
    for ch in word.chars() {
        session.handle(Input::Letter(ch), now);
    }

    match session.handle(Input::Submit, now) {
        Outcome::Submitted(Submission::Rejected(rejection)) => {
            println!("❌ {}", rejection_message(rejection));
            // Line mode has no cursor to fix a single letter; start the row over
            while session.handle(Input::Delete, now) == Outcome::Edited {}
            session.tick(now + session.config().shake_delay());
        }
        Outcome::Submitted(Submission::Accepted(_)) => {
            print_grid(session.engine());
            if !session.engine().status().is_over() {
                print_keyboard(session.engine());
                print_progress(session.engine());
            }
        }
        _ => {}
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead>(prompt: &str, input: &mut R) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;

    Ok((read > 0).then(|| line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::{GameConfig, GameStatus, PuzzleEngine};
    use crate::wordlists::Corpus;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corpus() -> Corpus {
        Corpus::new(words_from_slice(&["crane", "slate"])).unwrap()
    }

    fn session(corpus: &Corpus) -> Session<'_> {
        let config = GameConfig::default();
        let engine =
            PuzzleEngine::with_secret(corpus, &config, Word::new("crane").unwrap()).unwrap();
        Session::from_engine(engine, config, StdRng::seed_from_u64(0))
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(" QUIT "), Command::Quit);
        assert_eq!(Command::parse("n"), Command::New);
        assert_eq!(Command::parse("crane"), Command::Guess("crane".to_string()));
        assert_eq!(Command::parse("cranes"), Command::Invalid("cranes".to_string()));
    }

    #[test]
    fn scripted_win() {
        let c = corpus();
        let mut s = session(&c);
        let mut input = "slate\ncrane\nno\n".as_bytes();

        run_with_input(&mut s, &mut input).unwrap();

        assert_eq!(s.engine().status(), GameStatus::Won);
        assert_eq!(s.engine().current_attempt(), 2);
    }

    #[test]
    fn rejected_guess_leaves_row_empty() {
        let c = corpus();
        let mut s = session(&c);
        let mut input = "xxxxx\n".as_bytes();

        run_with_input(&mut s, &mut input).unwrap();

        assert_eq!(s.engine().current_attempt(), 0);
        assert!(s.engine().grid().is_blank());
        assert!(!s.is_shaking());
    }

    #[test]
    fn play_again_restarts() {
        let c = corpus();
        let mut s = session(&c);
        let mut input = "crane\nyes\nquit\n".as_bytes();

        run_with_input(&mut s, &mut input).unwrap();

        assert_eq!(s.tally().played, 1);
        assert_eq!(s.engine().status(), GameStatus::InProgress);
        assert!(s.engine().grid().is_blank());
    }
}
