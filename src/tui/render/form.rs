use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::api::client::TaskApi;
use crate::model::task::Status;
use crate::tui::app::{App, FormField, Mode};
use crate::util::unicode;

use super::helpers::centered_rect;

/// Render the create/edit form as a centered popup.
pub fn render_form<A: TaskApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let popup = centered_rect(area, 60, 9);
    frame.render_widget(Clear, popup);

    let title = match app.mode {
        Mode::Edit => match app.view.editing {
            Some(id) => format!(" edit task #{} ", id),
            None => " edit task ".to_string(),
        },
        _ => " add task ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(app.theme.background))
        .title(title)
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.height < 4 {
        return;
    }

    let rows = [
        field_row(app, FormField::Title, "title", &app.view.draft.title, inner.width),
        field_row(
            app,
            FormField::Description,
            "desc ",
            &app.view.draft.description,
            inner.width,
        ),
        status_row(app, inner.width),
    ];
    for (i, row) in rows.into_iter().enumerate() {
        let rect = Rect {
            x: inner.x,
            y: inner.y + 1 + i as u16,
            width: inner.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(row), rect);
    }

    if inner.height >= 6 {
        let hint = Line::from(Span::styled(
            " Enter save  Tab next field  Esc cancel",
            Style::default().fg(app.theme.dim).bg(app.theme.background),
        ));
        let rect = Rect {
            x: inner.x,
            y: inner.y + inner.height - 1,
            width: inner.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(hint), rect);
    }
}

/// One text input row: label, value, block cursor when focused.
fn field_row<A: TaskApi>(
    app: &App<A>,
    field: FormField,
    label: &str,
    value: &str,
    width: u16,
) -> Line<'static> {
    let bg = app.theme.background;
    let focused = app.form_field == field;
    let label_style = if focused {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let value_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut spans = vec![Span::styled(format!(" {}: ", label), label_style)];
    let budget = (width as usize).saturating_sub(unicode::display_width(label) + 4);

    if focused {
        let cursor = app.form_cursor.min(value.len());
        // Cursor sits between the two halves of the value
        let before = &value[..cursor];
        let after = &value[cursor..];
        spans.push(Span::styled(
            unicode::truncate_to_width(before, budget.saturating_sub(1)),
            value_style,
        ));
        spans.push(Span::styled(
            "\u{258C}".to_string(),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after.to_string(), value_style));
    } else {
        spans.push(Span::styled(
            unicode::truncate_to_width(value, budget),
            value_style,
        ));
    }
    Line::from(spans)
}

/// The status selector row: all three labels, the chosen one highlighted.
fn status_row<A: TaskApi>(app: &App<A>, _width: u16) -> Line<'static> {
    let bg = app.theme.background;
    let focused = app.form_field == FormField::Status;
    let label_style = if focused {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };

    let mut spans = vec![Span::styled(" status: ".to_string(), label_style)];
    for status in Status::ALL {
        let chosen = app.view.draft.status == status;
        let style = if chosen {
            Style::default().fg(app.theme.search_match_fg).bg(app.theme.search_match_bg)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        };
        spans.push(Span::styled(format!(" {} ", status.label()), style));
        spans.push(Span::styled(" ".to_string(), Style::default().bg(bg)));
    }
    if focused {
        spans.push(Span::styled(
            " (Space cycles)".to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    Line::from(spans)
}
