use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::api::client::TaskApi;
use crate::tui::app::App;

use super::helpers::centered_rect;

/// Render the blocking error popup. Any key dismisses it; the action
/// that failed can simply be retried.
pub fn render_error_popup<A: TaskApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let Some(message) = &app.error else { return };

    let width = 56u16.min(area.width.saturating_sub(4)).max(20);
    // Rough wrap estimate to size the box
    let text_width = width.saturating_sub(4).max(1) as usize;
    let lines = message.chars().count().div_ceil(text_width) as u16;
    let height = (lines + 4).min(area.height.saturating_sub(2)).max(5);

    let popup = centered_rect(area, width, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(app.theme.background))
        .title(" error ")
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let body = Paragraph::new(message.clone())
        .style(Style::default().fg(app.theme.text_bright).bg(app.theme.background))
        .wrap(Wrap { trim: false });
    let body_rect = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    frame.render_widget(body, body_rect);

    let hint = Line::from(Span::styled(
        "press any key",
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    let hint_rect = Rect {
        x: inner.x,
        y: inner.y + inner.height.saturating_sub(1),
        width: inner.width,
        height: 1,
    };
    frame.render_widget(Paragraph::new(hint), hint_rect);
}
