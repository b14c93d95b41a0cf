//! One-shot "shake" cue raised when a submission is rejected
//!
//! The cue is presentation pacing only. It holds the moment it was raised and
//! the caller clears it once the delay has passed.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShakeCue {
    raised_at: Option<Instant>,
    delay: Duration,
}

impl ShakeCue {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            raised_at: None,
            delay,
        }
    }

    /// Raise the cue at `now`
    ///
    /// Returns `false` and keeps the original start time if the cue is already
    /// raised.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.raised_at.is_some() {
            return false;
        }
        self.raised_at = Some(now);
        true
    }

    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.raised_at.is_some()
    }

    /// Clear the cue if it has been raised for at least the delay
    ///
    /// Returns `true` when this call cleared it.
    pub fn clear_if_elapsed(&mut self, now: Instant) -> bool {
        match self.raised_at {
            Some(raised) if now.saturating_duration_since(raised) >= self.delay => {
                self.raised_at = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the cue immediately
    pub fn reset(&mut self) {
        self.raised_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(400);

    #[test]
    fn starts_inactive() {
        assert!(!ShakeCue::new(DELAY).is_active());
    }

    #[test]
    fn stays_active_until_delay() {
        let start = Instant::now();
        let mut cue = ShakeCue::new(DELAY);
        assert!(cue.trigger(start));

        assert!(!cue.clear_if_elapsed(start + Duration::from_millis(399)));
        assert!(cue.is_active());

        assert!(cue.clear_if_elapsed(start + DELAY));
        assert!(!cue.is_active());
    }

    #[test]
    fn retrigger_while_active_is_ignored() {
        let start = Instant::now();
        let mut cue = ShakeCue::new(DELAY);
        assert!(cue.trigger(start));
        assert!(!cue.trigger(start + Duration::from_millis(300)));

        // Delay still measured from the first trigger
        assert!(cue.clear_if_elapsed(start + DELAY));
    }

    #[test]
    fn clear_without_trigger() {
        let mut cue = ShakeCue::new(DELAY);
        assert!(!cue.clear_if_elapsed(Instant::now()));
    }

    #[test]
    fn reset_drops_cue() {
        let mut cue = ShakeCue::new(DELAY);
        cue.trigger(Instant::now());
        cue.reset();
        assert!(!cue.is_active());
    }
}
