//! Event handling for the terminal wizard.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use personaje_core::Store;

use crate::app::App;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event
pub fn handle_event<S: Store>(app: &mut App<S>, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

fn handle_key_event<S: Store>(app: &mut App<S>, key: KeyEvent) -> EventResult {
    // Global shortcut (always works)
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    if app.wizard.summary_visible() {
        handle_summary_key(app, key)
    } else {
        handle_step_key(app, key)
    }
}

/// Keys on a step screen: move between fields, type into the highlighted
/// field, Enter advances (Finish on the last step), Esc retreats.
fn handle_step_key<S: Store>(app: &mut App<S>, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Up => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Down | KeyCode::Tab => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.advance();
            EventResult::NeedsRedraw
        }
        KeyCode::Esc => {
            app.retreat();
            if app.should_quit {
                EventResult::Quit
            } else {
                EventResult::NeedsRedraw
            }
        }
        KeyCode::Backspace => {
            app.backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            app.type_char(c);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// Keys on the summary screen. Without an active edit: navigate, Enter
/// edits the highlighted field, `n` starts a new character, `q` quits.
/// With an active edit: type into the field, Enter or Esc ends the edit.
fn handle_summary_key<S: Store>(app: &mut App<S>, key: KeyEvent) -> EventResult {
    if app.wizard.editing().is_some() {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                app.commit_edit();
                EventResult::NeedsRedraw
            }
            KeyCode::Backspace => {
                app.backspace();
                EventResult::NeedsRedraw
            }
            KeyCode::Char(c) => {
                app.type_char(c);
                EventResult::NeedsRedraw
            }
            _ => EventResult::Continue,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_prev();
            EventResult::NeedsRedraw
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            app.begin_edit();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('n') => {
            app.reset();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') | KeyCode::Esc => EventResult::Quit,
        _ => EventResult::Continue,
    }
}
