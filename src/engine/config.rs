//! Game configuration

use std::time::Duration;
use thiserror::Error;

/// Attempts per game unless configured otherwise
pub const DEFAULT_TRIES: usize = 6;

/// Largest attempt limit a game accepts
pub const MAX_TRIES: usize = 26;

/// How long a rejected submission keeps the row shaking
pub const DEFAULT_SHAKE_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one attempt, got {0}")]
    NoAttempts(usize),
    #[error("a game allows at most {max} attempts, got {0}", max = MAX_TRIES)]
    TooManyAttempts(usize),
}

/// Per-game settings shared by every restart of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    tries: usize,
    shake_delay: Duration,
}

impl GameConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::NoAttempts` if `tries` is zero and
    /// `ConfigError::TooManyAttempts` if it exceeds [`MAX_TRIES`].
    pub const fn new(tries: usize, shake_delay: Duration) -> Result<Self, ConfigError> {
        if tries == 0 {
            return Err(ConfigError::NoAttempts(tries));
        }
        if tries > MAX_TRIES {
            return Err(ConfigError::TooManyAttempts(tries));
        }
        Ok(Self { tries, shake_delay })
    }

    /// Default settings with a different attempt limit
    ///
    /// # Errors
    ///
    /// Same as [`GameConfig::new`].
    pub const fn with_tries(tries: usize) -> Result<Self, ConfigError> {
        Self::new(tries, DEFAULT_SHAKE_DELAY)
    }

    #[inline]
    #[must_use]
    pub const fn tries(&self) -> usize {
        self.tries
    }

    #[inline]
    #[must_use]
    pub const fn shake_delay(&self) -> Duration {
        self.shake_delay
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tries: DEFAULT_TRIES,
            shake_delay: DEFAULT_SHAKE_DELAY,
        }
    }
}
