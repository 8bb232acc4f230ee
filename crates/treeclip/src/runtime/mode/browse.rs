use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::{AppMode, HelpContext};

/// Handles key input while the app is in `AppMode::Browse`.
pub(crate) async fn handle(app: &mut App, key: KeyEvent) -> io::Result<EventResult> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            return Ok(EventResult::Quit);
        }
        KeyCode::Char('?') => {
            open_help_overlay(app);
        }
        KeyCode::Char('j') if is_plain_char_key(key, 'j') => {
            move_cursor(app, 1);
        }
        KeyCode::Char('k') if is_plain_char_key(key, 'k') => {
            move_cursor(app, -1);
        }
        KeyCode::Down => {
            scroll_output(app, 1);
        }
        KeyCode::Up => {
            scroll_output(app, -1);
        }
        KeyCode::Char(' ') => {
            toggle_selection_at_cursor(app);
        }
        KeyCode::Enter => {
            app.generate_output().await;
            reset_output_scroll(app);
        }
        KeyCode::Char('c') if is_plain_char_key(key, 'c') => {
            app.copy_output();
        }
        KeyCode::Char('x') => {
            app.clear_selection();
        }
        KeyCode::Char('R') => {
            app.reset();
            reset_output_scroll(app);
        }
        KeyCode::Char('r') if is_plain_char_key(key, 'r') => {
            app.rescan().await;
        }
        _ => {}
    }

    Ok(EventResult::Continue)
}

/// Opens the help overlay while preserving browse state.
fn open_help_overlay(app: &mut App) {
    let mode = std::mem::replace(&mut app.mode, AppMode::browse());
    if let AppMode::Browse {
        cursor,
        output_scroll,
    } = mode
    {
        app.mode = AppMode::Help {
            context: HelpContext::Browse {
                cursor,
                output_scroll,
            },
        };

        return;
    }

    app.mode = mode;
}

/// Moves the tree cursor by `offset` rows, clamped to the row range.
fn move_cursor(app: &mut App, offset: isize) {
    let AppMode::Browse { cursor, .. } = &mut app.mode else {
        return;
    };

    if app.rows.is_empty() {
        return;
    }

    if offset.is_negative() {
        *cursor = cursor.saturating_sub(offset.unsigned_abs());

        return;
    }

    *cursor = cursor
        .saturating_add(offset.unsigned_abs())
        .min(app.rows.len().saturating_sub(1));
}

/// Updates output pane scroll position by `offset` lines.
fn scroll_output(app: &mut App, offset: i16) {
    let AppMode::Browse { output_scroll, .. } = &mut app.mode else {
        return;
    };

    if offset.is_negative() {
        *output_scroll = output_scroll.saturating_sub(offset.unsigned_abs());

        return;
    }

    *output_scroll = output_scroll.saturating_add(offset.unsigned_abs());
}

fn reset_output_scroll(app: &mut App) {
    if let AppMode::Browse { output_scroll, .. } = &mut app.mode {
        *output_scroll = 0;
    }
}

fn toggle_selection_at_cursor(app: &mut App) {
    let AppMode::Browse { cursor, .. } = &app.mode else {
        return;
    };

    app.toggle_row(*cursor);
}

/// Returns true when `key` is the exact plain character without modifiers.
fn is_plain_char_key(key: KeyEvent, character: char) -> bool {
    key.code == KeyCode::Char(character) && key.modifiers == KeyModifiers::NONE
}
