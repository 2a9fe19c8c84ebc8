use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::api::client::TaskApi;
use crate::model::task::Task;
use crate::ops::projection;
use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::push_highlighted_spans;

/// Render the header: title line plus the filter/sort summary.
pub fn render_header<A: TaskApi>(frame: &mut Frame, app: &App<A>, area: Rect) {
    if area.height == 0 {
        return;
    }
    let bg = app.theme.background;

    let title = Line::from(vec![
        Span::styled(
            " taskdeck ",
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled(
            format!("({} tasks)", app.store.tasks().len()),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(title).style(Style::default().bg(bg)),
        Rect { height: 1, ..area },
    );

    if area.height < 2 {
        return;
    }
    let mut summary = vec![
        Span::styled(" filter: ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            app.view.filter.label(),
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled("  sort: ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            app.view.sort.label(),
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
    ];
    if !app.view.search.trim().is_empty() {
        summary.push(Span::styled(
            "  search: ",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        summary.push(Span::styled(
            app.view.search.clone(),
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(summary)).style(Style::default().bg(bg)),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Render the task list with cursor, scrolling and search highlighting.
pub fn render_list<A: TaskApi>(frame: &mut Frame, app: &mut App<A>, area: Rect) {
    if area.height == 0 {
        return;
    }
    let tasks: Vec<Task> = projection::derive(app.store.tasks(), &app.view)
        .into_iter()
        .cloned()
        .collect();

    if tasks.is_empty() {
        let message = if app.store.tasks().is_empty() {
            "no tasks yet  (a to add, r to reload)"
        } else {
            "nothing matches the current filter/search"
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", message),
                Style::default().fg(app.theme.dim).bg(app.theme.background),
            ))),
            area,
        );
        return;
    }

    // Keep the cursor row inside the visible window
    let height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
    if app.scroll_offset >= tasks.len() {
        app.scroll_offset = tasks.len().saturating_sub(1);
    }

    let re = app.search_highlight_re();
    for (row, task) in tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let selected = row == app.cursor;
        let line = task_line(app, task, selected, area.width as usize, re.as_ref());
        let rect = Rect {
            x: area.x,
            y: area.y + (row - app.scroll_offset) as u16,
            width: area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(line), rect);
    }
}

fn task_line<A: TaskApi>(
    app: &App<A>,
    task: &Task,
    selected: bool,
    width: usize,
    search_re: Option<&regex::Regex>,
) -> Line<'static> {
    let theme = &app.theme;
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let text_fg = if selected { theme.text_bright } else { theme.text };
    let base = Style::default().fg(text_fg).bg(bg);
    let dim = Style::default().fg(theme.dim).bg(bg);
    let highlight = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);

    let mut spans: Vec<Span<'static>> = Vec::new();
    spans.push(Span::styled(
        format!("{}[", if selected { ">" } else { " " }),
        dim,
    ));
    spans.push(Span::styled(
        task.status.marker_char().to_string(),
        Style::default().fg(theme.status_color(task.status)).bg(bg),
    ));
    spans.push(Span::styled("] ", dim));
    spans.push(Span::styled(format!("#{} ", task.id), dim));

    // Status label goes on the right edge; budget the text to what is left
    let label = task.status.label();
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let right_width = unicode::display_width(label) + 2;
    let text_budget = width.saturating_sub(used + right_width + 1);

    // Title bright, description dim, both search-highlighted
    let title_shown = unicode::truncate_to_width(&task.title, text_budget);
    push_highlighted_spans(&mut spans, &title_shown, base, highlight, search_re);
    if let Some(desc) = &task.description {
        let remaining = text_budget.saturating_sub(unicode::display_width(&title_shown) + 2);
        if remaining > 3 {
            spans.push(Span::styled("  ".to_string(), dim));
            let desc_shown = unicode::truncate_to_width(desc, remaining);
            push_highlighted_spans(&mut spans, &desc_shown, dim, highlight, search_re);
        }
    }

    // Pad to the right edge, then the status label
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    if used + right_width < width {
        spans.push(Span::styled(" ".repeat(width - used - right_width), Style::default().bg(bg)));
    }
    spans.push(Span::styled(
        format!("{} ", label),
        Style::default().fg(theme.status_color(task.status)).bg(bg),
    ));

    Line::from(spans)
}
