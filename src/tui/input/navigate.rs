use crossterm::event::{KeyCode, KeyEvent};

use crate::api::client::TaskApi;
use crate::model::view::TaskDraft;
use crate::store::TaskPatch;
use crate::tui::app::{App, FormField, Mode};

use super::*;

pub(super) fn handle_navigate<A: TaskApi>(app: &mut App<A>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            let len = app.visible_ids().len();
            if len > 0 {
                app.cursor = len - 1;
            }
        }
        KeyCode::Char('a') => start_create(app),
        KeyCode::Char('e') | KeyCode::Enter => start_edit(app),
        KeyCode::Char(' ') => cycle_status(app),
        KeyCode::Char('d') => start_delete(app),
        KeyCode::Char('/') => app.mode = Mode::Search,
        KeyCode::Char('x') => {
            app.view.search.clear();
            app.clamp_cursor();
        }
        KeyCode::Char('f') => {
            app.view.filter = app.view.filter.cycled();
            app.clamp_cursor();
        }
        KeyCode::Char('o') => app.view.sort = app.view.sort.toggled(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('?') => app.show_help = true,
        _ => {}
    }
}

pub(super) fn move_cursor<A: TaskApi>(app: &mut App<A>, delta: isize) {
    let len = app.visible_ids().len();
    if len == 0 {
        return;
    }
    let moved = app.cursor as isize + delta;
    app.cursor = moved.clamp(0, len as isize - 1) as usize;
}

fn start_create<A: TaskApi>(app: &mut App<A>) {
    app.view.draft = TaskDraft::default();
    app.view.editing = None;
    app.form_field = FormField::Title;
    app.form_cursor = 0;
    app.mode = Mode::Create;
}

/// Entering edit mode copies the task's current fields into the form.
fn start_edit<A: TaskApi>(app: &mut App<A>) {
    let Some(id) = app.cursor_task_id() else { return };
    let Some(task) = app.store.get(id) else { return };
    app.view.draft = TaskDraft::from_task(task);
    app.view.editing = Some(id);
    app.form_field = FormField::Title;
    app.form_cursor = app.view.draft.title.len();
    app.mode = Mode::Edit;
}

/// Space: advance the task under the cursor to the next status.
fn cycle_status<A: TaskApi>(app: &mut App<A>) {
    let Some(id) = app.cursor_task_id() else { return };
    let Some(task) = app.store.get(id) else { return };
    let next = task.status.cycled();
    match app.store.update(id, &TaskPatch::status(next)) {
        Ok(updated) => {
            app.notice = Some(format!("#{} ist jetzt {}", updated.id, updated.status.label()));
            app.clamp_cursor();
        }
        Err(e) => app.report_error(&e),
    }
}

fn start_delete<A: TaskApi>(app: &mut App<A>) {
    let Some(id) = app.cursor_task_id() else { return };
    let Some(task) = app.store.get(id) else { return };
    app.pending_delete = Some((id, task.title.clone()));
    app.mode = Mode::ConfirmDelete;
}
