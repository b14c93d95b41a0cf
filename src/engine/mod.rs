//! Puzzle engine and the session that owns it

mod config;
mod cue;
mod puzzle;
mod session;

pub use config::{ConfigError, DEFAULT_SHAKE_DELAY, DEFAULT_TRIES, GameConfig, MAX_TRIES};
pub use cue::ShakeCue;
pub use puzzle::{EngineError, GameStatus, PuzzleEngine, Rejection, Submission};
pub use session::{Input, Outcome, Session, Tally};
