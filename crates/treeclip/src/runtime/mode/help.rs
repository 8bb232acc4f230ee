use crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;
use crate::runtime::EventResult;
use crate::ui::state::app_mode::AppMode;

/// Handles key input while the help overlay is open.
pub(crate) fn handle(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => {
            close_help_overlay(app);
        }
        _ => {}
    }

    EventResult::Continue
}

/// Restores the mode that was active before help was opened.
fn close_help_overlay(app: &mut App) {
    let mode = std::mem::replace(&mut app.mode, AppMode::browse());
    if let AppMode::Help { context } = mode {
        app.mode = context.restore_mode();

        return;
    }

    app.mode = mode;
}
