use serde::Serialize;

use crate::model::task::Task;
use crate::model::view::SortKey;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Wire vocabulary, so JSON output round-trips into API payloads
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct CheckJson {
    pub base_url: String,
    pub tasks: usize,
}

#[derive(Serialize)]
pub struct DeletedJson {
    pub deleted: u64,
}

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        status: task.status.wire_name().to_string(),
        created_at: task.created_at.map(|t| t.to_rfc3339()),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    format!("[{}] #{} {}", task.status.marker_char(), task.id, task.title)
}

/// Format detailed task view
pub fn format_task_detail(task: &Task) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format_task_line(task));
    lines.push(format!("status: {}", task.status.label()));
    if let Some(desc) = &task.description {
        lines.push("description:".to_string());
        for line in desc.lines() {
            lines.push(format!("  {}", line));
        }
    }
    if let Some(created) = task.created_at {
        lines.push(format!("created: {}", created.format("%Y-%m-%d %H:%M")));
    }
    lines
}

/// Parse a sort key argument
pub fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    match s {
        "id" => Ok(SortKey::Id),
        "title" => Ok(SortKey::Title),
        _ => Err(format!("unknown sort key '{}' (expected: id, title)", s)),
    }
}
