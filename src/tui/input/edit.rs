use crossterm::event::{KeyCode, KeyEvent};

use crate::api::client::TaskApi;
use crate::store::TaskPatch;
use crate::tui::app::{App, FormField, Mode};
use crate::util::unicode;

use super::*;

/// Create and edit share one form: title, description, status.
pub(super) fn handle_form<A: TaskApi>(app: &mut App<A>, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => cancel_form(app),
        KeyCode::Enter => submit_form(app),
        KeyCode::Tab | KeyCode::Down => focus_next(app),
        KeyCode::BackTab | KeyCode::Up => focus_prev(app),
        KeyCode::Left => {
            if app.form_field == FormField::Status {
                // Two steps forward in a 3-cycle is one step back
                app.view.draft.status = app.view.draft.status.cycled().cycled();
            } else {
                move_left(app);
            }
        }
        KeyCode::Right => {
            if app.form_field == FormField::Status {
                app.view.draft.status = app.view.draft.status.cycled();
            } else {
                move_right(app);
            }
        }
        KeyCode::Backspace => backspace(app),
        KeyCode::Char(' ') if app.form_field == FormField::Status => {
            app.view.draft.status = app.view.draft.status.cycled();
        }
        KeyCode::Char(c) => insert_char(app, c),
        _ => {}
    }
}

fn focused_text<'a, A: TaskApi>(app: &'a mut App<A>) -> Option<&'a mut String> {
    match app.form_field {
        FormField::Title => Some(&mut app.view.draft.title),
        FormField::Description => Some(&mut app.view.draft.description),
        FormField::Status => None,
    }
}

fn focused_len<A: TaskApi>(app: &App<A>) -> usize {
    match app.form_field {
        FormField::Title => app.view.draft.title.len(),
        FormField::Description => app.view.draft.description.len(),
        FormField::Status => 0,
    }
}

fn focus_next<A: TaskApi>(app: &mut App<A>) {
    app.form_field = app.form_field.next();
    app.form_cursor = focused_len(app);
}

fn focus_prev<A: TaskApi>(app: &mut App<A>) {
    app.form_field = app.form_field.prev();
    app.form_cursor = focused_len(app);
}

fn insert_char<A: TaskApi>(app: &mut App<A>, c: char) {
    let cursor = app.form_cursor;
    if let Some(text) = focused_text(app) {
        let at = cursor.min(text.len());
        let mut buf = [0u8; 4];
        text.insert_str(at, c.encode_utf8(&mut buf));
        app.form_cursor = at + c.len_utf8();
    }
}

fn backspace<A: TaskApi>(app: &mut App<A>) {
    let cursor = app.form_cursor;
    if let Some(text) = focused_text(app) {
        let end = cursor.min(text.len());
        if let Some(start) = unicode::prev_grapheme_boundary(text, end) {
            text.replace_range(start..end, "");
            app.form_cursor = start;
        }
    }
}

fn move_left<A: TaskApi>(app: &mut App<A>) {
    let cursor = app.form_cursor;
    if let Some(text) = focused_text(app) {
        if let Some(prev) = unicode::prev_grapheme_boundary(text, cursor.min(text.len())) {
            app.form_cursor = prev;
        }
    }
}

fn move_right<A: TaskApi>(app: &mut App<A>) {
    let cursor = app.form_cursor;
    if let Some(text) = focused_text(app) {
        if let Some(next) = unicode::next_grapheme_boundary(text, cursor.min(text.len())) {
            app.form_cursor = next;
        }
    }
}

fn submit_form<A: TaskApi>(app: &mut App<A>) {
    let draft = app.view.draft.clone();
    let outcome = match app.view.editing {
        None => app
            .store
            .create(&draft.title, draft.description_opt(), draft.status)
            .map(|t| format!("#{} hinzugefügt", t.id)),
        Some(id) => {
            // Full-record edit: every field of the form is submitted
            let patch = TaskPatch {
                title: Some(draft.title.clone()),
                description: Some(draft.description.clone()),
                status: Some(draft.status),
            };
            app.store
                .update(id, &patch)
                .map(|t| format!("#{} aktualisiert", t.id))
        }
    };

    match outcome {
        Ok(notice) => {
            // A successful submit resets the form and leaves edit mode
            app.view.draft.clear();
            app.view.editing = None;
            app.mode = Mode::Navigate;
            app.notice = Some(notice);
            app.clamp_cursor();
        }
        // Failure keeps the form populated so nothing typed is lost
        Err(e) => app.report_error(&e),
    }
}

fn cancel_form<A: TaskApi>(app: &mut App<A>) {
    app.view.draft.clear();
    app.view.editing = None;
    app.mode = Mode::Navigate;
}
