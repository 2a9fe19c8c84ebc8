use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::api::client::TaskApi;
use crate::tui::app::App;

use super::helpers::centered_rect;

const HELP: &[(&str, &str)] = &[
    ("j/k", "move cursor"),
    ("g/G", "jump to top/bottom"),
    ("a", "add task"),
    ("e / Enter", "edit task"),
    ("Space", "cycle status"),
    ("d", "delete task (asks first)"),
    ("/", "search (Esc clears)"),
    ("x", "clear search"),
    ("f", "cycle status filter"),
    ("o", "toggle sort (id / title)"),
    ("r", "reload from server"),
    ("q", "quit"),
];

/// Render the help overlay
pub fn render_help_overlay<A: TaskApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    let height = HELP.len() as u16 + 4;
    let popup = centered_rect(area, 44, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(app.theme.background))
        .title(" keys ")
        .style(Style::default().bg(app.theme.background));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    for (i, (key, action)) in HELP.iter().enumerate() {
        if i as u16 + 1 >= inner.height {
            break;
        }
        let line = Line::from(vec![
            Span::styled(
                format!(" {:<10}", key),
                Style::default().fg(app.theme.highlight).bg(app.theme.background),
            ),
            Span::styled(
                (*action).to_string(),
                Style::default().fg(app.theme.text).bg(app.theme.background),
            ),
        ]);
        let rect = Rect {
            x: inner.x,
            y: inner.y + 1 + i as u16,
            width: inner.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(line), rect);
    }
}
