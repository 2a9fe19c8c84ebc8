use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::task::{Status, Task};

/// A task as the server sends it.
///
/// Status stays a raw string here so unknown values survive long enough
/// to hit the defaulting decode in [`Status::from_wire`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskWire {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl TaskWire {
    /// Decode into the local model. Unknown statuses default to open;
    /// an empty description and an unparseable timestamp both become None.
    pub fn into_task(self) -> Task {
        let created_at = self.created_at.as_deref().and_then(parse_timestamp);
        Task {
            id: self.id,
            title: self.title,
            description: self.description.filter(|d| !d.is_empty()),
            status: Status::from_wire(&self.status),
            created_at,
        }
    }
}

/// Body of create and update requests. Update replaces the full record,
/// so this always carries every writable field.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPayload {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
}

impl TaskPayload {
    pub fn from_parts(title: &str, description: Option<&str>, status: Status) -> TaskPayload {
        TaskPayload {
            title: title.to_string(),
            description: description.map(str::to_string),
            status: status.wire_name().to_string(),
        }
    }

    pub fn from_task(task: &Task) -> TaskPayload {
        TaskPayload {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.wire_name().to_string(),
        }
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_server_record() {
        let json = r#"{
            "id": 3,
            "title": "Steuererklärung",
            "description": "Belege sammeln",
            "status": "in_progress",
            "created_at": "2026-08-01T09:30:00Z"
        }"#;
        let wire: TaskWire = serde_json::from_str(json).unwrap();
        let task = wire.into_task();
        assert_eq!(task.id, 3);
        assert_eq!(task.title, "Steuererklärung");
        assert_eq!(task.description.as_deref(), Some("Belege sammeln"));
        assert_eq!(task.status, Status::InProgress);
        assert!(task.created_at.is_some());
    }

    #[test]
    fn test_decode_tolerates_missing_optionals() {
        let wire: TaskWire =
            serde_json::from_str(r#"{"id": 1, "title": "X", "status": "open"}"#).unwrap();
        let task = wire.into_task();
        assert_eq!(task.description, None);
        assert_eq!(task.created_at, None);
    }

    #[test]
    fn test_unknown_status_decodes_to_open() {
        let wire: TaskWire =
            serde_json::from_str(r#"{"id": 1, "title": "X", "status": "archived"}"#).unwrap();
        assert_eq!(wire.into_task().status, Status::Open);
    }

    #[test]
    fn test_empty_description_becomes_none() {
        let wire: TaskWire =
            serde_json::from_str(r#"{"id": 1, "title": "X", "description": "", "status": "open"}"#)
                .unwrap();
        assert_eq!(wire.into_task().description, None);
    }

    #[test]
    fn test_bad_timestamp_becomes_none() {
        let wire = TaskWire {
            id: 1,
            title: "X".to_string(),
            description: None,
            status: "open".to_string(),
            created_at: Some("yesterday-ish".to_string()),
        };
        assert_eq!(wire.into_task().created_at, None);
    }

    #[test]
    fn test_payload_omits_absent_description() {
        let payload = TaskPayload::from_parts("Aufräumen", None, Status::Open);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"title": "Aufräumen", "status": "open"})
        );
    }

    #[test]
    fn test_payload_carries_wire_status() {
        let payload = TaskPayload::from_parts("A", Some("b"), Status::InProgress);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["status"], "in_progress");
        assert_eq!(value["description"], "b");
    }
}
