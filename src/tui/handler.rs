//! Event handler for the TUI
//!
//! Routes keyboard events to the focused area: the expense form fields or
//! the party share controls.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ActiveDialog, App, Focus};
use super::event::Event;

/// Slider steps moved by a large adjustment
const LARGE_STEP: f64 = 10.0;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(_) | Event::Resize(_, _) | Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    // Any key dismisses the help dialog
    if app.has_dialog() {
        app.close_dialog();
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => {
            app.set_focus(app.focus.next());
            return Ok(());
        }
        KeyCode::BackTab => {
            app.set_focus(app.focus.prev());
            return Ok(());
        }
        _ => {}
    }

    if app.focus.is_text() {
        handle_input_key(app, key)
    } else {
        handle_parties_key(app, key)
    }
}

/// Handle keys while a form field has focus
fn handle_input_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Enter => app.submit_expense(),
        KeyCode::Esc => app.set_focus(Focus::Parties),
        KeyCode::Char(c) => {
            let rejected = app.focused_input().is_some_and(|input| !input.insert(c));
            if rejected {
                app.set_status("Enter a numeric amount");
            }
        }
        _ => {
            if let Some(input) = app.focused_input() {
                match key.code {
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.move_left(),
                    KeyCode::Right => input.move_right(),
                    KeyCode::Home => input.move_start(),
                    KeyCode::End => input.move_end(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Handle keys while the party shares have focus
fn handle_parties_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let shifted = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Up | KeyCode::Char('k') => app.select_prev_party(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_party(),

        KeyCode::Left if shifted => app.nudge_selected(-LARGE_STEP),
        KeyCode::Right if shifted => app.nudge_selected(LARGE_STEP),
        KeyCode::Left | KeyCode::Char('h') => app.nudge_selected(-1.0),
        KeyCode::Right | KeyCode::Char('l') => app.nudge_selected(1.0),
        KeyCode::Char('H') => app.nudge_selected(-LARGE_STEP),
        KeyCode::Char('L') => app.nudge_selected(LARGE_STEP),
        KeyCode::Home | KeyCode::Char('0') => app.set_selected(0.0),
        KeyCode::End => app.set_selected(100.0),

        KeyCode::Char('+') | KeyCode::Char('a') => app.add_party(),
        KeyCode::Char('-') | KeyCode::Char('d') => app.remove_party(),
        KeyCode::Char('r') => app.reset_shares(),
        KeyCode::Char('m') => app.toggle_mode(),

        KeyCode::Enter => app.submit_expense(),
        _ => {}
    }
    Ok(())
}
