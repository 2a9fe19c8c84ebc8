use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle stage.
///
/// A status has two vocabularies: the wire name the server speaks
/// (`open`, `in_progress`, `done`) and the label shown to the user
/// (`offen`, `in Bearbeitung`, `erledigt`). The mapping is total in both
/// directions; unknown wire values decode to `Open`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Done,
}

impl Status {
    /// All statuses in lifecycle order.
    pub const ALL: [Status; 3] = [Status::Open, Status::InProgress, Status::Done];

    /// The name this status goes by on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            Status::Open => "open",
            Status::InProgress => "in_progress",
            Status::Done => "done",
        }
    }

    /// Decode a wire status. Unknown values fall back to `Open`.
    pub fn from_wire(s: &str) -> Status {
        match s {
            "open" => Status::Open,
            "in_progress" => Status::InProgress,
            "done" => Status::Done,
            _ => Status::Open,
        }
    }

    /// The label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Status::Open => "offen",
            Status::InProgress => "in Bearbeitung",
            Status::Done => "erledigt",
        }
    }

    /// The character used inside the list marker `[ ]`
    pub fn marker_char(self) -> char {
        match self {
            Status::Open => ' ',
            Status::InProgress => '>',
            Status::Done => 'x',
        }
    }

    /// Parse a user-supplied status argument. Both vocabularies are accepted.
    pub fn parse_arg(s: &str) -> Result<Status, String> {
        match s.trim().to_lowercase().as_str() {
            "open" | "offen" => Ok(Status::Open),
            "in_progress" | "in bearbeitung" => Ok(Status::InProgress),
            "done" | "erledigt" => Ok(Status::Done),
            _ => Err(format!(
                "unknown status '{}' (expected: offen, \"in Bearbeitung\", erledigt)",
                s
            )),
        }
    }

    /// Next status in the lifecycle: offen → in Bearbeitung → erledigt → offen
    pub fn cycled(self) -> Status {
        match self {
            Status::Open => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::Open,
        }
    }
}

/// A task as cached from the remote collection. The server owns the
/// record; this is the client's copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier
    pub id: u64,
    /// Title (required, non-empty)
    pub title: String,
    pub description: Option<String>,
    pub status: Status,
    /// Set by the server on creation; absent on older records
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_round_trip_is_identity() {
        for status in Status::ALL {
            assert_eq!(Status::from_wire(status.wire_name()), status);
        }
    }

    #[test]
    fn test_unknown_wire_status_defaults_to_open() {
        assert_eq!(Status::from_wire("cancelled"), Status::Open);
        assert_eq!(Status::from_wire(""), Status::Open);
        assert_eq!(Status::from_wire("OPEN"), Status::Open);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Status::Open.label(), "offen");
        assert_eq!(Status::InProgress.label(), "in Bearbeitung");
        assert_eq!(Status::Done.label(), "erledigt");
    }

    #[test]
    fn test_parse_arg_accepts_both_vocabularies() {
        assert_eq!(Status::parse_arg("offen"), Ok(Status::Open));
        assert_eq!(Status::parse_arg("open"), Ok(Status::Open));
        assert_eq!(Status::parse_arg("In Bearbeitung"), Ok(Status::InProgress));
        assert_eq!(Status::parse_arg("in_progress"), Ok(Status::InProgress));
        assert_eq!(Status::parse_arg(" erledigt "), Ok(Status::Done));
        assert_eq!(Status::parse_arg("done"), Ok(Status::Done));
        assert!(Status::parse_arg("finished").is_err());
    }

    #[test]
    fn test_cycle_visits_all_statuses() {
        let mut status = Status::Open;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(status);
            status = status.cycled();
        }
        assert_eq!(status, Status::Open);
        assert_eq!(seen, Status::ALL.to_vec());
    }
}
