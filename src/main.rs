//! Word Puzzle - CLI
//!
//! Guess the hidden word in the terminal, with a TUI or a plain line mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_puzzle::{
    commands::{check_guess, run_simple},
    engine::{DEFAULT_TRIES, GameConfig, Session},
    logging::init_logging,
    output::print_check_result,
    wordlists::Corpus,
};

#[derive(Parser)]
#[command(
    name = "wordle_puzzle",
    about = "Guess the hidden five-letter word with per-letter hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of attempts per game
    #[arg(short, long, global = true, default_value_t = DEFAULT_TRIES)]
    tries: usize,

    /// Seed for reproducible secret words
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Write logs to this file instead of stderr (filter with `RUST_LOG`)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without TUI
    Simple,

    /// Show the feedback a guess would get against a secret word
    Check {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },
}

/// Load the corpus selected by the -w flag
fn load_corpus(wordlist: &str) -> Result<Corpus> {
    match wordlist {
        "builtin" => Corpus::builtin().context("embedded word list is unusable"),
        path => Corpus::from_file(path).with_context(|| format!("cannot use word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Check { secret, guess } => run_check_command(&secret, &guess),
        Commands::Play => {
            let corpus = load_corpus(&cli.wordlist)?;
            let config = GameConfig::with_tries(cli.tries)?;
            run_play_command(&corpus, config, cli.seed)
        }
        Commands::Simple => {
            let corpus = load_corpus(&cli.wordlist)?;
            let config = GameConfig::with_tries(cli.tries)?;
            let mut session = Session::new(&corpus, config, cli.seed);
            run_simple(&mut session)
        }
    }
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess)?;
    print_check_result(&result);
    Ok(())
}

fn run_play_command(corpus: &Corpus, config: GameConfig, seed: Option<u64>) -> Result<()> {
    use wordle_puzzle::interactive::{App, run_tui};

    let app = App::new(Session::new(corpus, config, seed));
    run_tui(app)
}
