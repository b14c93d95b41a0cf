//! TUI rendering with ratatui
//!
//! Grid, keyboard hints, messages and the end-of-game popup.

use super::app::{App, MessageStyle};
use crate::core::{Feedback, Letter, keyboard_rows};
use crate::engine::{GameStatus, PuzzleEngine};
use crate::output::text::{PLAY_AGAIN, outcome_headline, reveal_line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph},
};

const GREEN: Color = Color::Rgb(6, 203, 132);
const YELLOW: Color = Color::Rgb(241, 225, 76);
const BROWN: Color = Color::Rgb(152, 93, 38);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if app.session.engine().status().is_over() {
        render_game_over(f, app.session.engine(), f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORD PUZZLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let engine = app.session.engine();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(grid_height(engine.tries())), // Grid
            Constraint::Length(5),                         // Keyboard
            Constraint::Min(0),
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_keyboard(f, engine, chunks[1]);
}

/// Rows needed for `tries` grid lines plus borders
fn grid_height(tries: usize) -> u16 {
    u16::try_from(tries).unwrap_or(u16::MAX).saturating_add(2)
}

/// Style for a tile with the given feedback
fn tile_style(feedback: Feedback) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match feedback {
        Feedback::Correct => base.fg(Color::Black).bg(GREEN),
        Feedback::Present => base.fg(Color::Black).bg(YELLOW),
        Feedback::Absent => base.fg(Color::White).bg(Color::DarkGray),
        Feedback::Unknown => base.fg(Color::White),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let engine = app.session.engine();
    let shaking = app.session.is_shaking();

    let lines: Vec<Line> = engine
        .grid()
        .rows()
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let is_current = row_index == engine.current_attempt();
            let mut spans = Vec::with_capacity(row.cells().len() * 2);

            // Shaking row is nudged right and drawn in red
            if is_current && shaking {
                spans.push(Span::raw(" "));
            }

            for (column, cell) in row.cells().iter().enumerate() {
                let span = match cell {
                    Some(letter) => {
                        let style = if is_current && shaking {
                            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                        } else {
                            tile_style(engine.cell_feedback(row_index, column))
                        };
                        Span::styled(format!(" {letter} "), style)
                    }
                    None if is_current => Span::styled(" _ ", Style::default().fg(BROWN)),
                    None => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                };
                spans.push(span);
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn key_span(engine: &PuzzleEngine, letter: Letter) -> Span<'static> {
    let style = match engine.keyboard_feedback(letter) {
        // Keys tried but not in the word are dimmed
        Feedback::Absent => Style::default().fg(Color::White).bg(BROWN),
        other => tile_style(other),
    };
    Span::styled(format!(" {letter} "), style)
}

fn render_keyboard(f: &mut Frame, engine: &PuzzleEngine, area: Rect) {
    let rows = keyboard_rows();
    let last = rows.len() - 1;

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let mut spans: Vec<Span> = row.iter().map(|&l| key_span(engine, l)).collect();
            if index == last {
                spans.insert(0, Span::styled("Enter ", Style::default().fg(Color::Cyan)));
                spans.push(Span::styled(" ⌫", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_attempts(f, app.session.engine(), chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_attempts(f: &mut Frame, engine: &PuzzleEngine, area: Rect) {
    let used = engine.current_attempt();
    let tries = engine.tries();
    let percent = (used * 100 / tries.max(1)).min(100) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{tries} used"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let mode_text = match app.session.engine().status() {
        GameStatus::InProgress => "Playing",
        GameStatus::Won => "Won",
        GameStatus::Lost => "Lost",
    };
    let mode = Paragraph::new(format!("Status: {mode_text}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let tally = app.session.tally();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        tally.played,
        tally.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = if app.session.engine().status().is_over() {
        "Enter/n: New Game | q/Esc: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_game_over(f: &mut Frame, engine: &PuzzleEngine, area: Rect) {
    let popup = centered_rect(40, 7, area);
    let status = engine.status();
    let color = if status == GameStatus::Won {
        Color::Green
    } else {
        Color::Red
    };

    let mut lines = vec![Line::from(Span::styled(
        outcome_headline(status),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(word) = engine.revealed_word() {
        lines.push(Line::from(reveal_line(word.text())));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[ {PLAY_AGAIN} ]  Enter"),
        Style::default().fg(Color::Cyan),
    )));

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Rectangle of `width` columns and `height` rows centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::engine::{GameConfig, Input, Session};
    use crate::wordlists::Corpus;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app(corpus: &Corpus) -> App<'_> {
        let config = GameConfig::default();
        let engine =
            PuzzleEngine::with_secret(corpus, &config, Word::new("crane").unwrap()).unwrap();
        App::new(Session::from_engine(engine, config, StdRng::seed_from_u64(0)))
    }

    #[test]
    fn centered_rect_fits() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(40, 40, area), area);
    }

    #[test]
    fn grid_height_saturates() {
        assert_eq!(grid_height(6), 8);
        assert_eq!(grid_height(65_534), u16::MAX);
        assert_eq!(grid_height(usize::MAX), u16::MAX);
    }

    #[test]
    fn renders_longest_allowed_game() {
        let c = Corpus::new(words_from_slice(&["crane"])).unwrap();
        let config = GameConfig::with_tries(crate::engine::MAX_TRIES).unwrap();
        let engine =
            PuzzleEngine::with_secret(&c, &config, Word::new("crane").unwrap()).unwrap();
        let app = App::new(Session::from_engine(engine, config, StdRng::seed_from_u64(0)));

        let screen = render(&app);
        assert!(screen.contains("0/26 used"));
    }

    #[test]
    fn renders_typed_letters() {
        let c = Corpus::new(words_from_slice(&["crane"])).unwrap();
        let mut app = app(&c);
        app.session.handle(Input::Letter('q'), Instant::now());
        app.session.handle(Input::Letter('z'), Instant::now());

        let screen = render(&app);
        assert!(screen.contains(" Q   Z "));
        assert!(screen.contains("Status: Playing"));
    }

    #[test]
    fn renders_game_over_popup() {
        let c = Corpus::new(words_from_slice(&["crane"])).unwrap();
        let mut app = app(&c);
        for ch in "crane".chars() {
            app.session.handle(Input::Letter(ch), Instant::now());
        }
        app.session.handle(Input::Submit, Instant::now());

        let screen = render(&app);
        assert!(screen.contains("You won!"));
        assert!(screen.contains("The word was: CRANE"));
    }
}
