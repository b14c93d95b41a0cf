//! Play session: the owner of the current game
//!
//! A session maps input events onto the engine, keeps the shake cue for
//! rejected submissions, and replaces the engine with a fresh one on restart.

use super::config::GameConfig;
use super::cue::ShakeCue;
use super::puzzle::{GameStatus, PuzzleEngine, Submission};
use crate::wordlists::Corpus;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, info};

/// Input events forwarded by a front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Letter(char),
    Submit,
    Delete,
    Restart,
}

/// What an input did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Unchanged,
    /// The current row was edited
    Edited,
    /// A submission was processed
    Submitted(Submission),
    /// A new game started
    Restarted,
}

/// Games played and won since the session started
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub played: usize,
    pub won: usize,
}

impl Tally {
    /// Win percentage, 0 when no game finished yet
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            self.won as f64 / self.played as f64 * 100.0
        }
    }
}

pub struct Session<'a> {
    engine: PuzzleEngine<'a>,
    config: GameConfig,
    rng: StdRng,
    shake: ShakeCue,
    tally: Tally,
}

impl<'a> Session<'a> {
    /// Start a session and its first game
    ///
    /// With a `seed` every secret draw is reproducible.
    #[must_use]
    pub fn new(corpus: &'a Corpus, config: GameConfig, seed: Option<u64>) -> Self {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let engine = PuzzleEngine::new(corpus, &config, &mut rng);
        info!(words = corpus.len(), tries = config.tries(), "session started");

        Self::from_engine(engine, config, rng)
    }

    /// Wrap an existing game; restarts draw from `rng`
    #[must_use]
    pub fn from_engine(engine: PuzzleEngine<'a>, config: GameConfig, rng: StdRng) -> Self {
        Self {
            engine,
            config,
            rng,
            shake: ShakeCue::new(config.shake_delay()),
            tally: Tally::default(),
        }
    }

    /// Apply one input event at time `now`
    pub fn handle(&mut self, input: Input, now: Instant) -> Outcome {
        match input {
            Input::Letter(ch) => edited(self.engine.place_letter(ch)),
            Input::Delete => edited(self.engine.remove_letter()),
            Input::Submit => self.submit(now),
            Input::Restart => {
                if self.restart() {
                    Outcome::Restarted
                } else {
                    Outcome::Unchanged
                }
            }
        }
    }

    fn submit(&mut self, now: Instant) -> Outcome {
        let submission = self.engine.submit_attempt();
        match submission {
            Submission::Ignored => return Outcome::Unchanged,
            Submission::Rejected(_) => {
                self.shake.trigger(now);
            }
            Submission::Accepted(status) if status.is_over() => {
                self.tally.played += 1;
                if status == GameStatus::Won {
                    self.tally.won += 1;
                }
                debug!(?status, attempts = self.engine.current_attempt(), "game finished");
            }
            Submission::Accepted(_) => {}
        }
        Outcome::Submitted(submission)
    }

    /// Replace a finished game with a new one
    ///
    /// Returns `false` and keeps the current game while it is still in
    /// progress.
    pub fn restart(&mut self) -> bool {
        if !self.engine.status().is_over() {
            return false;
        }
        self.engine = PuzzleEngine::new(self.engine.corpus(), &self.config, &mut self.rng);
        self.shake.reset();
        debug!(played = self.tally.played, "restarted");
        true
    }

    /// Clear the shake cue once its delay has passed
    ///
    /// Returns `true` if the cue was cleared, i.e. the view needs a redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.shake.clear_if_elapsed(now)
    }

    #[inline]
    #[must_use]
    pub const fn engine(&self) -> &PuzzleEngine<'a> {
        &self.engine
    }

    #[inline]
    #[must_use]
    pub const fn is_shaking(&self) -> bool {
        self.shake.is_active()
    }

    #[inline]
    #[must_use]
    pub const fn tally(&self) -> Tally {
        self.tally
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}

const fn edited(changed: bool) -> Outcome {
    if changed {
        Outcome::Edited
    } else {
        Outcome::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Word};
    use crate::engine::puzzle::Rejection;
    use crate::wordlists::loader::words_from_slice;
    use std::time::Duration;

    fn corpus() -> Corpus {
        Corpus::new(words_from_slice(&["crane", "slate", "irate"])).unwrap()
    }

    fn session(corpus: &Corpus) -> Session<'_> {
        let config = GameConfig::default();
        let engine =
            PuzzleEngine::with_secret(corpus, &config, Word::new("crane").unwrap()).unwrap();
        Session::from_engine(engine, config, StdRng::seed_from_u64(3))
    }

    fn play(session: &mut Session, word: &str, now: Instant) -> Outcome {
        for ch in word.chars() {
            session.handle(Input::Letter(ch), now);
        }
        session.handle(Input::Submit, now)
    }

    #[test]
    fn letters_and_delete_edit_row() {
        let c = corpus();
        let mut s = session(&c);
        let now = Instant::now();
        assert_eq!(s.handle(Input::Letter('c'), now), Outcome::Edited);
        assert_eq!(s.handle(Input::Letter('#'), now), Outcome::Unchanged);
        assert_eq!(s.handle(Input::Delete, now), Outcome::Edited);
        assert_eq!(s.handle(Input::Delete, now), Outcome::Unchanged);
    }

    #[test]
    fn rejection_raises_shake_until_tick() {
        let c = corpus();
        let mut s = session(&c);
        let now = Instant::now();

        assert_eq!(
            s.handle(Input::Submit, now),
            Outcome::Submitted(Submission::Rejected(Rejection::Incomplete))
        );
        assert!(s.is_shaking());

        assert!(!s.tick(now + Duration::from_millis(100)));
        assert!(s.is_shaking());
        assert!(s.tick(now + Duration::from_millis(400)));
        assert!(!s.is_shaking());
    }

    #[test]
    fn fresh_session_has_empty_tally() {
        let c = corpus();
        let s = session(&c);
        assert_eq!(s.tally(), Tally::default());
        assert_eq!(s.tally().played, 0);
    }

    #[test]
    fn restart_refused_mid_game() {
        let c = corpus();
        let mut s = session(&c);
        let now = Instant::now();
        s.handle(Input::Letter('c'), now);

        assert_eq!(s.handle(Input::Restart, now), Outcome::Unchanged);
        assert_eq!(s.engine().grid().cell(0, 0).map(Letter::as_char), Some('C'));
    }

    #[test]
    fn win_counts_and_restart_resets() {
        let c = corpus();
        let mut s = session(&c);
        let now = Instant::now();

        assert_eq!(
            play(&mut s, "crane", now),
            Outcome::Submitted(Submission::Accepted(GameStatus::Won))
        );
        assert_eq!(s.tally(), Tally { played: 1, won: 1 });

        assert_eq!(s.handle(Input::Restart, now), Outcome::Restarted);
        let engine = s.engine();
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.current_attempt(), 0);
        assert!(engine.grid().is_blank());
        assert!(engine.revealed_word().is_none());
    }

    #[test]
    fn loss_counts_without_win() {
        let c = corpus();
        let mut s = session(&c);
        let now = Instant::now();
        for _ in 0..6 {
            play(&mut s, "slate", now);
        }
        assert_eq!(s.engine().status(), GameStatus::Lost);
        assert_eq!(s.tally(), Tally { played: 1, won: 0 });
        assert!((s.tally().win_rate() - 0.0).abs() < f64::EPSILON);

        assert_eq!(s.handle(Input::Submit, now), Outcome::Unchanged);
    }

    #[test]
    fn restart_clears_shake() {
        let c = corpus();
        let mut s = session(&c);
        let now = Instant::now();
        s.handle(Input::Submit, now);
        assert!(s.is_shaking());

        play(&mut s, "crane", now);
        assert!(s.restart());
        assert!(!s.is_shaking());
    }

    #[test]
    fn seeded_sessions_draw_the_same_secrets() {
        let c = Corpus::builtin().unwrap();
        let secrets = |seed| {
            let mut s = Session::new(&c, GameConfig::with_tries(1).unwrap(), Some(seed));
            let mut drawn = Vec::new();
            for _ in 0..3 {
                play(&mut s, "crane", Instant::now());
                assert!(s.engine().status().is_over());
                drawn.push(s.engine().revealed_word().unwrap().clone());
                assert!(s.restart());
            }
            drawn
        };
        assert_eq!(secrets(9), secrets(9));
    }

    #[test]
    fn win_rate() {
        let tally = Tally { played: 4, won: 3 };
        assert!((tally.win_rate() - 75.0).abs() < f64::EPSILON);
    }
}
