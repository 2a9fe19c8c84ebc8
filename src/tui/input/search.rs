use crossterm::event::{KeyCode, KeyEvent};

use crate::api::client::TaskApi;
use crate::tui::app::{App, Mode};

use super::*;

/// Incremental search: the projection narrows with every keystroke.
pub(super) fn handle_search<A: TaskApi>(app: &mut App<A>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.view.search.clear();
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        // Enter keeps the query applied
        KeyCode::Enter => app.mode = Mode::Navigate,
        KeyCode::Backspace => {
            app.view.search.pop();
            app.clamp_cursor();
        }
        KeyCode::Char(c) => {
            app.view.search.push(c);
            app.cursor = 0;
            app.clamp_cursor();
        }
        _ => {}
    }
}
