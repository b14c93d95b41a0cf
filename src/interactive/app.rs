//! TUI application state and logic

use crate::engine::{GameStatus, Input, Outcome, Session, Submission};
use crate::output::text::{PLAY_AGAIN, outcome_headline, rejection_message, reveal_line};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// How often the event loop wakes up to clear the shake cue
const TICK: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        let mut app = Self {
            session,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message("Type a word and press Enter to guess.", MessageStyle::Info);
        app
    }

    /// Map a key press onto a session input
    #[must_use]
    pub fn input_for(&self, key: KeyEvent) -> Option<Input> {
        let game_over = self.session.engine().status().is_over();
        match key.code {
            KeyCode::Enter | KeyCode::Char('n' | 'N') if game_over => Some(Input::Restart),
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
            KeyCode::Char(c) => Some(Input::Letter(c)),
            KeyCode::Enter => Some(Input::Submit),
            KeyCode::Backspace | KeyCode::Delete => Some(Input::Delete),
            _ => None,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q' | 'Q') if self.session.engine().status().is_over() => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if let Some(input) = self.input_for(key) {
            let outcome = self.session.handle(input, now);
            self.report(outcome);
        }
    }

    fn report(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Submitted(Submission::Rejected(rejection)) => {
                self.add_message(rejection_message(rejection), MessageStyle::Error);
            }
            Outcome::Submitted(Submission::Accepted(status)) if status.is_over() => {
                let style = if status == GameStatus::Won {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                self.add_message(outcome_headline(status), style);
                if let Some(word) = self.session.engine().revealed_word() {
                    let line = reveal_line(word.text());
                    self.add_message(&line, MessageStyle::Info);
                }
                self.add_message(
                    &format!("{PLAY_AGAIN}: press Enter or 'n', 'q' to quit."),
                    MessageStyle::Info,
                );
            }
            Outcome::Restarted => {
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
            }
            _ => {}
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        app.session.tick(Instant::now());

        if app.should_quit {
            debug!(tally = ?app.session.tally(), "quitting");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Letter, Word};
    use crate::engine::{GameConfig, PuzzleEngine};
    use crate::wordlists::Corpus;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corpus() -> Corpus {
        Corpus::new(words_from_slice(&["crane", "slate"])).unwrap()
    }

    fn app(corpus: &Corpus) -> App<'_> {
        let config = GameConfig::default();
        let engine =
            PuzzleEngine::with_secret(corpus, &config, Word::new("crane").unwrap()).unwrap();
        App::new(Session::from_engine(engine, config, StdRng::seed_from_u64(0)))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
    }

    fn type_word(app: &mut App, word: &str) {
        for ch in word.chars() {
            press(app, KeyCode::Char(ch));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_submitting() {
        let c = corpus();
        let mut app = app(&c);
        type_word(&mut app, "slate");
        assert_eq!(app.session.engine().current_attempt(), 1);
    }

    #[test]
    fn q_is_a_letter_mid_game() {
        let c = corpus();
        let mut app = app(&c);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert!(app.session.engine().grid().cell(0, 0).is_some());
    }

    #[test]
    fn rejection_shakes_and_reports() {
        let c = corpus();
        let mut app = app(&c);
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_shaking());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn win_then_restart_with_enter() {
        let c = corpus();
        let mut app = app(&c);
        type_word(&mut app, "crane");
        assert_eq!(app.session.engine().status(), GameStatus::Won);
        assert!(app.messages.iter().any(|m| m.text.contains("CRANE")));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.engine().status(), GameStatus::InProgress);
        assert!(app.session.engine().grid().is_blank());
    }

    #[test]
    fn n_restarts_only_after_game_over() {
        let c = corpus();
        let mut app = app(&c);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.engine().grid().cell(0, 0).map(Letter::as_char), Some('N'));

        press(&mut app, KeyCode::Backspace);
        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.engine().status(), GameStatus::InProgress);
        assert!(app.session.engine().grid().is_blank());
    }

    #[test]
    fn quit_keys() {
        let c = corpus();
        let mut app = app(&c);
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);
        assert!(app.session.engine().grid().is_blank());
    }

    #[test]
    fn messages_are_capped() {
        let c = corpus();
        let mut app = app(&c);
        for i in 0..10 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "5");
    }
}
