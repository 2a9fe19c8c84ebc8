use crate::model::task::{Status, Task};

/// Status filter for the displayed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    /// Cycle: alle → offen → in Bearbeitung → erledigt → alle
    pub fn cycled(self) -> StatusFilter {
        match self {
            StatusFilter::All => StatusFilter::Only(Status::Open),
            StatusFilter::Only(Status::Open) => StatusFilter::Only(Status::InProgress),
            StatusFilter::Only(Status::InProgress) => StatusFilter::Only(Status::Done),
            StatusFilter::Only(Status::Done) => StatusFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "alle",
            StatusFilter::Only(status) => status.label(),
        }
    }
}

/// Sort key for the displayed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Server-assigned ids are monotonic, so this is creation order.
    #[default]
    Id,
    Title,
}

impl SortKey {
    pub fn toggled(self) -> SortKey {
        match self {
            SortKey::Id => SortKey::Title,
            SortKey::Title => SortKey::Id,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Title => "title",
        }
    }
}

/// Fields of the create/edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: Status,
}

impl TaskDraft {
    /// Prefill from an existing task (entering edit mode).
    pub fn from_task(task: &Task) -> TaskDraft {
        TaskDraft {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
        }
    }

    /// The description as the store wants it: trimmed, empty → None.
    pub fn description_opt(&self) -> Option<&str> {
        let trimmed = self.description.trim();
        if trimmed.is_empty() { None } else { Some(trimmed) }
    }

    pub fn clear(&mut self) {
        *self = TaskDraft::default();
    }
}

/// Transient UI state. Never persisted: the form resets on each
/// successful submit, everything else is discarded on exit.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub filter: StatusFilter,
    /// Free-text search, matched case-insensitively against title and
    /// description. Empty means no search.
    pub search: String,
    pub sort: SortKey,
    pub draft: TaskDraft,
    /// Task currently being edited. At most one at a time; `None` while
    /// the draft belongs to the create form.
    pub editing: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_cycle_covers_every_status_and_returns_to_all() {
        let mut filter = StatusFilter::All;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(filter);
            filter = filter.cycled();
        }
        assert_eq!(filter, StatusFilter::All);
        for status in Status::ALL {
            assert!(seen.contains(&StatusFilter::Only(status)));
        }
    }

    #[test]
    fn test_draft_from_task_copies_current_fields() {
        let task = Task {
            id: 7,
            title: "Einkaufen".to_string(),
            description: Some("Milch und Brot".to_string()),
            status: Status::InProgress,
            created_at: None,
        };
        let draft = TaskDraft::from_task(&task);
        assert_eq!(draft.title, "Einkaufen");
        assert_eq!(draft.description, "Milch und Brot");
        assert_eq!(draft.status, Status::InProgress);
    }

    #[test]
    fn test_description_opt_drops_whitespace() {
        let mut draft = TaskDraft::default();
        assert_eq!(draft.description_opt(), None);
        draft.description = "   ".to_string();
        assert_eq!(draft.description_opt(), None);
        draft.description = " notes ".to_string();
        assert_eq!(draft.description_opt(), Some("notes"));
    }
}
