//! TUI rendering with ratatui
//!
//! The guess grid, on-screen keyboard, and message area.

use super::app::App;
use crate::core::LetterStatus;
use crate::engine::{GameStatus, InputEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// The three keyboard rows, QWERTY layout with ENTER and DEL on the bottom
const KEY_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "DEL"],
];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Message area
            Constraint::Length(8), // Guess grid
            Constraint::Length(5), // On-screen keyboard
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_message(f, app, chunks[1]);
    render_board(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(app.date_label.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" WORDLE DAILY ")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.engine.status() {
        GameStatus::Won => (
            "Congratulations! You guessed the word!".to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        GameStatus::Lost => (
            format!("Game Over! The word was {}.", app.engine.secret_word()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        GameStatus::Playing => match app.engine.last_error() {
            Some(error) => (error.to_string(), Style::default().fg(Color::Yellow)),
            None => (
                "Type a guess and press Enter. Esc quits.".to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        },
    };

    let message = Paragraph::new(text).style(style).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(message, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .engine
        .board_rows()
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (ch, &status) in row.word.chars().zip(&row.statuses) {
                spans.push(Span::styled(format!(" {ch} "), cell_style(status)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    app.key_targets.clear();

    for (row_index, keys) in KEY_ROWS.iter().enumerate() {
        let y = inner.y + row_index as u16;
        if y >= inner.y + inner.height {
            break;
        }

        // One column gap between keys, centered as a whole
        let row_width: u16 =
            keys.iter().copied().map(key_width).sum::<u16>() + keys.len() as u16 - 1;
        let mut x = inner.x + inner.width.saturating_sub(row_width) / 2;

        for &key in *keys {
            let width = key_width(key);
            let rect = Rect::new(x, y, width, 1);
            let input = key_input(key);

            app.key_targets.push((rect, input));

            let style = match input {
                InputEvent::Letter(ch) => key_style(app.engine.hints().hint(ch)),
                InputEvent::Submit | InputEvent::Delete => {
                    Style::default().fg(Color::Black).bg(Color::Gray)
                }
            };
            f.render_widget(
                Paragraph::new(format!("{key:^width$}", width = width as usize)).style(style),
                rect,
            );

            x += width + 1;
        }
    }
}

fn key_width(key: &str) -> u16 {
    key.len() as u16 + 2
}

fn key_input(key: &str) -> InputEvent {
    match key {
        "ENTER" => InputEvent::Submit,
        "DEL" => InputEvent::Delete,
        letter => {
            // KEY_ROWS only holds single letters beyond the two wide keys
            let ch = letter.chars().next().unwrap_or('A');
            InputEvent::Letter(ch)
        }
    }
}

fn cell_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unused => Style::default().fg(Color::White).bg(Color::Black),
    }
}

fn key_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Unused => Style::default().fg(Color::Black).bg(Color::Gray),
        _ => cell_style(status),
    }
}
