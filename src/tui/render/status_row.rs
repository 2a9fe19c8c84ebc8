use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::api::client::TaskApi;
use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row<A: TaskApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Search => {
            // Search prompt: /pattern▌
            let mut spans = vec![
                Span::styled(
                    format!("/{}", app.view.search),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}".to_string(),
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            pad_with_hint(&mut spans, "Enter apply  Esc clear", width, app, bg);
            Line::from(spans)
        }
        Mode::ConfirmDelete => {
            let prompt = match &app.pending_delete {
                Some((id, title)) => format!("delete #{} '{}'? (y/n)", id, title),
                None => "delete? (y/n)".to_string(),
            };
            Line::from(Span::styled(
                prompt,
                Style::default().fg(app.theme.red).bg(bg),
            ))
        }
        _ => {
            let mut spans = Vec::new();
            if let Some(notice) = &app.notice {
                spans.push(Span::styled(
                    notice.clone(),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            } else if !app.view.search.trim().is_empty() {
                spans.push(Span::styled(
                    format!("/{}", app.view.search),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            let hint = if app.show_key_hints {
                "a add  e edit  Space status  d del  / search  f filter  o sort  r reload  ? help"
            } else {
                "? help"
            };
            pad_with_hint(&mut spans, hint, width, app, bg);
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Right-align a dim hint after the existing spans, if it fits.
fn pad_with_hint<A: TaskApi>(
    spans: &mut Vec<Span<'static>>,
    hint: &str,
    width: usize,
    app: &App<A>,
    bg: ratatui::style::Color,
) {
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
}
