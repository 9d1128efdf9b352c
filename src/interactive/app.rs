//! TUI application state and event loop

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use std::io;

use crate::engine::{GameEngine, InputEvent};
use crate::words::display_date;

/// Application state
pub struct App {
    pub engine: GameEngine,
    pub date_label: String,
    pub should_quit: bool,
    /// Hit boxes for the on-screen keyboard, rebuilt on every draw
    pub key_targets: Vec<(Rect, InputEvent)>,
}

impl App {
    #[must_use]
    pub fn new(engine: GameEngine) -> Self {
        let date_label = display_date(engine.date());
        Self {
            engine,
            date_label,
            should_quit: false,
            key_targets: Vec::new(),
        }
    }

    /// The input event for the on-screen key under `(column, row)`, if any
    #[must_use]
    pub fn key_at(&self, column: u16, row: u16) -> Option<InputEvent> {
        self.key_targets
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|&(_, input)| input)
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &mut app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    // Physical keys and widget clicks share one input path
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        app.engine.handle_input(InputEvent::Letter(c))?;
                    }
                    KeyCode::Backspace => {
                        app.engine.handle_input(InputEvent::Delete)?;
                    }
                    KeyCode::Enter => {
                        app.engine.handle_input(InputEvent::Submit)?;
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse.kind
                    && let Some(input) = app.key_at(mouse.column, mouse.row)
                {
                    app.engine.handle_input(input)?;
                }
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
