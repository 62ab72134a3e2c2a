//! Terminal UI: event loop, terminal lifecycle, key mapping.
//!
//! The only module with side effects. Each key event maps to one
//! semantic [`Action`], which is applied to the [`App`] before the next
//! event is read; the frame is then redrawn from a fresh read model.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

use app::{Action, App};
use input::Direction;

/// Maps a crossterm key event to a semantic action.
///
/// Returns `None` for keys that don't map to any action.
fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Move(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Move(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Tab => Some(Action::SwitchFocus),

        // Direct cell placement
        KeyCode::Char(c @ '1'..='9') => Some(Action::Cell(c as u8 - b'0')),

        // Game controls
        KeyCode::Char('s') => Some(Action::ToggleSort),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Runs the TUI until the user quits.
pub fn run(sort_descending: bool) -> Result<()> {
    info!("starting TUI");
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let mut app = App::new(sort_descending);

    let res = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    info!("TUI exited");
    res
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = map_key(key) {
                    app.handle(action);
                } else {
                    debug!(?key, "unmapped key");
                }
            }
            // Resize and the rest just trigger a redraw.
            _ => {}
        }
    }
}
