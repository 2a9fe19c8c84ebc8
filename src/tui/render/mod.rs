pub mod error_popup;
pub mod form;
pub mod help_overlay;
pub mod helpers;
pub mod list_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use crate::api::client::TaskApi;

use super::app::{App, Mode};

/// Main render function, dispatches to sub-renderers
pub fn render<A: TaskApi>(frame: &mut Frame, app: &mut App<A>) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    list_view::render_header(frame, app, chunks[0]);
    list_view::render_list(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Create/edit form popup
    if matches!(app.mode, Mode::Create | Mode::Edit) {
        form::render_form(frame, app, frame.area());
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    // Error popup wins over everything else
    if app.error.is_some() {
        error_popup::render_error_popup(frame, app, frame.area());
    }
}
