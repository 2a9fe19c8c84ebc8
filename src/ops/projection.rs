use std::cmp::Ordering;

use crate::model::task::Task;
use crate::model::view::{SortKey, ViewState};

/// Derive the display list: filter by status, then by search text, then
/// sort. Pure projection over the cache; recomputed on every render.
pub fn derive<'a>(tasks: &'a [Task], view: &ViewState) -> Vec<&'a Task> {
    let query = view.search.trim().to_lowercase();

    let mut out: Vec<&Task> = tasks
        .iter()
        .filter(|t| view.filter.matches(t.status))
        .filter(|t| query.is_empty() || matches_query(t, &query))
        .collect();

    match view.sort {
        SortKey::Id => out.sort_by_key(|t| t.id),
        SortKey::Title => out.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
    out
}

/// Case-insensitive substring match against title or description.
fn matches_query(task: &Task, query: &str) -> bool {
    task.title.to_lowercase().contains(query)
        || task
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query))
}

/// Case-insensitive lexicographic order. The sort is stable, so equal
/// keys keep their cache order.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Status;
    use crate::model::view::StatusFilter;
    use pretty_assertions::assert_eq;

    fn task(id: u64, title: &str, status: Status) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            status,
            created_at: None,
        }
    }

    fn titles<'a>(tasks: &[&'a Task]) -> Vec<&'a str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn test_filter_includes_matching_status_and_excludes_others() {
        let tasks = vec![
            task(1, "a", Status::Open),
            task(2, "b", Status::InProgress),
            task(3, "c", Status::Done),
        ];
        for t in &tasks {
            let mut view = ViewState::default();
            view.filter = StatusFilter::Only(t.status);
            let shown = derive(&tasks, &view);
            assert!(shown.iter().any(|s| s.id == t.id));
            for other in &tasks {
                if other.status != t.status {
                    assert!(!shown.iter().any(|s| s.id == other.id));
                }
            }
        }
    }

    #[test]
    fn test_filter_all_includes_everything() {
        let tasks = vec![
            task(1, "a", Status::Open),
            task(2, "b", Status::Done),
        ];
        let view = ViewState::default();
        assert_eq!(derive(&tasks, &view).len(), 2);
    }

    #[test]
    fn test_sort_by_title() {
        let tasks = vec![task(1, "b", Status::Open), task(2, "a", Status::Open)];
        let mut view = ViewState::default();
        view.sort = SortKey::Title;
        assert_eq!(titles(&derive(&tasks, &view)), vec!["a", "b"]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let tasks = vec![
            task(1, "banane", Status::Open),
            task(2, "Apfel", Status::Open),
        ];
        let mut view = ViewState::default();
        view.sort = SortKey::Title;
        assert_eq!(titles(&derive(&tasks, &view)), vec!["Apfel", "banane"]);
    }

    #[test]
    fn test_sort_by_id_ascending() {
        let tasks = vec![task(5, "x", Status::Open), task(1, "y", Status::Open)];
        let view = ViewState::default();
        let ids: Vec<u64> = derive(&tasks, &view).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let mut with_desc = task(1, "Einkauf", Status::Open);
        with_desc.description = Some("a DESC here".to_string());
        let tasks = vec![with_desc, task(2, "Anderes", Status::Open)];

        let mut view = ViewState::default();
        view.search = "desc".to_string();
        let shown = derive(&tasks, &view);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, 1);

        // Cleared search shows everything again
        view.search.clear();
        assert_eq!(derive(&tasks, &view).len(), 2);
    }

    #[test]
    fn test_search_matches_title() {
        let tasks = vec![
            task(1, "Steuererklärung", Status::Open),
            task(2, "Einkauf", Status::Open),
        ];
        let mut view = ViewState::default();
        view.search = "steuer".to_string();
        assert_eq!(titles(&derive(&tasks, &view)), vec!["Steuererklärung"]);
    }

    #[test]
    fn test_whitespace_search_is_no_search() {
        let tasks = vec![task(1, "a", Status::Open)];
        let mut view = ViewState::default();
        view.search = "   ".to_string();
        assert_eq!(derive(&tasks, &view).len(), 1);
    }

    #[test]
    fn test_filter_and_search_compose() {
        let mut done = task(1, "Bericht schreiben", Status::Done);
        done.description = Some("Quartalsbericht".to_string());
        let tasks = vec![
            done,
            task(2, "Bericht lesen", Status::Open),
            task(3, "Aufräumen", Status::Done),
        ];
        let mut view = ViewState::default();
        view.filter = StatusFilter::Only(Status::Done);
        view.search = "bericht".to_string();
        let shown = derive(&tasks, &view);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].id, 1);
    }
}
