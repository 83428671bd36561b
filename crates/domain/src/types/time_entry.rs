//! Time entries and timer action responses

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::TaskId;

/// Server-assigned time entry identifier
pub type TimeEntryId = i64;

/// One tracked interval of a task.
///
/// `end_time` and `duration_seconds` stay null while the entry is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: TimeEntryId,
    pub task_id: TaskId,
    #[serde(with = "crate::types::timestamp")]
    pub start_time: DateTime<Utc>,
    #[serde(default, with = "crate::types::timestamp::option")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_seconds: Option<f64>,
    #[serde(with = "crate::types::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl TimeEntry {
    pub fn is_running(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Response of `POST /tasks/{id}/start`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerStartResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub time_entry: TimeEntry,
}

/// Response of `POST /tasks/{id}/stop`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerStopResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub time_entry: Option<TimeEntry>,
    pub duration_seconds: f64,
}
