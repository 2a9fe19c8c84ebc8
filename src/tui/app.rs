use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::api::client::{HttpTaskApi, TaskApi};
use crate::io::config_io;
use crate::model::view::ViewState;
use crate::ops::projection;
use crate::store::{StoreError, TaskStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    /// Create form; fields live in `view.draft`
    Create,
    /// Edit form for the task in `view.editing`
    Edit,
    /// Delete confirmation for `pending_delete`
    ConfirmDelete,
}

/// Which form field has focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Status,
}

impl FormField {
    pub fn next(self) -> FormField {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Status,
            FormField::Status => FormField::Title,
        }
    }

    pub fn prev(self) -> FormField {
        match self {
            FormField::Title => FormField::Status,
            FormField::Description => FormField::Title,
            FormField::Status => FormField::Description,
        }
    }
}

/// Main application state
pub struct App<A: TaskApi> {
    pub store: TaskStore<A>,
    pub view: ViewState,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Cursor index into the derived display list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Blocking error popup; any key dismisses it
    pub error: Option<String>,
    /// One-line notice in the status row (result of the last action)
    pub notice: Option<String>,
    /// Which form field has focus (create/edit modes)
    pub form_field: FormField,
    /// Byte offset of the cursor in the focused text field
    pub form_cursor: usize,
    /// Delete target (id, title) while confirming
    pub pending_delete: Option<(u64, String)>,
}

impl<A: TaskApi> App<A> {
    pub fn new(store: TaskStore<A>, show_key_hints: bool, theme: Theme) -> App<A> {
        App {
            store,
            view: ViewState::default(),
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            error: None,
            notice: None,
            form_field: FormField::default(),
            form_cursor: 0,
            pending_delete: None,
        }
    }

    /// Ids of the tasks as currently displayed (projection order).
    pub fn visible_ids(&self) -> Vec<u64> {
        projection::derive(self.store.tasks(), &self.view)
            .iter()
            .map(|t| t.id)
            .collect()
    }

    /// Task id under the cursor.
    pub fn cursor_task_id(&self) -> Option<u64> {
        self.visible_ids().get(self.cursor).copied()
    }

    /// Keep the cursor inside the (possibly shrunk) display list.
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_ids().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    /// Record an operation failure for the error popup.
    pub fn report_error(&mut self, err: &StoreError) {
        self.error = Some(err.to_string());
    }

    /// Search regex for match highlighting: escaped pattern, case-insensitive.
    pub fn search_highlight_re(&self) -> Option<Regex> {
        let query = self.view.search.trim();
        if query.is_empty() {
            return None;
        }
        Regex::new(&format!("(?i){}", regex::escape(query))).ok()
    }

    /// Re-fetch the collection. On failure the popup shows and the
    /// previous cache stays.
    pub fn reload(&mut self) {
        match self.store.load() {
            Ok(()) => {
                self.notice = Some(format!("{} tasks loaded", self.store.tasks().len()));
                self.clamp_cursor();
            }
            Err(e) => self.report_error(&e),
        }
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&str>, api_url: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::load_config(config_path, api_url)?;
    let api = HttpTaskApi::from_config(&config.api);
    let store = TaskStore::new(api);
    let theme = Theme::from_config(&config.ui);

    let mut app = App::new(store, config.ui.show_key_hints, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initial load after terminal setup so a failure surfaces as the popup
    app.reload();

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<HttpTaskApi>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
