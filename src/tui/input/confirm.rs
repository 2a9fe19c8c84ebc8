use crossterm::event::{KeyCode, KeyEvent};

use crate::api::client::TaskApi;
use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_confirm<A: TaskApi>(app: &mut App<A>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            if let Some((id, _)) = app.pending_delete.take() {
                match app.store.delete(id) {
                    Ok(()) => {
                        app.notice = Some(format!("#{} gelöscht", id));
                        app.clamp_cursor();
                    }
                    Err(e) => app.report_error(&e),
                }
            }
            app.mode = Mode::Navigate;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.pending_delete = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
