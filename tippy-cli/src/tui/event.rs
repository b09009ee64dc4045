//! Event handling for keyboard input using crossterm.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tui_input::backend::crossterm::EventHandler;

use crate::tui::app::{App, Focus};

/// Poll for events and handle them.
/// Returns Ok(true) if the app should quit.
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    if event::poll(Duration::from_millis(100))?
        && let Event::Key(key) = event::read()?
    {
        return Ok(handle_key(app, key));
    }

    Ok(false)
}

/// Applies a single key press. Returns true if the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    // Only handle key press events, not release
    if key.kind != KeyEventKind::Press {
        return false;
    }

    app.message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('r') => app.reset(),
            _ => {}
        }
        return !app.running;
    }

    if app.show_help {
        // Any key closes the help overlay
        app.show_help = false;
        return false;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::F(1) => app.show_help = true,
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
        _ => match app.focus {
            Focus::Bill => {
                if app.bill_input.handle_event(&Event::Key(key)).is_some_and(|c| c.value) {
                    app.bill_edited();
                }
            }
            Focus::People => {
                if app.people_input.handle_event(&Event::Key(key)).is_some_and(|c| c.value) {
                    app.people_edited();
                }
            }
            Focus::TipSlider => handle_slider(app, key.code),
        },
    }

    !app.running
}

fn handle_slider(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => app.nudge_tip(-1),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => app.nudge_tip(1),
        KeyCode::PageDown => app.nudge_tip(-5),
        KeyCode::PageUp => app.nudge_tip(5),
        KeyCode::Home => app.set_tip(0),
        KeyCode::End => app.set_tip(i64::from(app.slider_max())),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
