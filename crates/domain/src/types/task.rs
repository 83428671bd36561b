//! Task records and their closed enums

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::time_entry::TimeEntryId;
use crate::impl_wire_name_conversions;

/// Server-assigned task identifier
pub type TaskId = i64;

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl_wire_name_conversions!(TaskPriority {
    Low => "low",
    Medium => "medium",
    High => "high",
});

/// Task workflow status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Done,
}

impl_wire_name_conversions!(TaskStatus {
    Pending => "pending",
    InProgress => "in_progress",
    Done => "done",
});

impl TaskStatus {
    /// Human label used in task cards and filters.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

/// Cached copy of a server task.
///
/// `total_time_seconds` only counts closed entries; `is_timing` and
/// `active_entry_id` describe the single open entry, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub user_id: i64,
    #[serde(with = "crate::types::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "crate::types::timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_time_seconds: f64,
    #[serde(default)]
    pub is_timing: bool,
    #[serde(default)]
    pub active_entry_id: Option<TimeEntryId>,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Accumulated server-confirmed total, floored to whole seconds.
    pub fn total_whole_seconds(&self) -> u64 {
        super::whole_seconds(self.total_time_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TASK_JSON: &str = r#"{
        "id": 7,
        "title": "Write report",
        "description": null,
        "priority": "high",
        "status": "in_progress",
        "due_date": "2024-05-01",
        "user_id": 3,
        "created_at": "2024-04-20T08:00:00",
        "updated_at": null,
        "total_time_seconds": 125.75,
        "is_timing": true,
        "active_entry_id": 42
    }"#;

    #[test]
    fn decodes_server_task() {
        let task: Task = serde_json::from_str(TASK_JSON).unwrap();

        assert_eq!(task.id, 7);
        assert_eq!(task.priority, TaskPriority::High);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(task.total_whole_seconds(), 125);
        assert!(task.is_timing);
        assert_eq!(task.active_entry_id, Some(42));
        assert!(!task.is_done());
    }

    #[test]
    fn status_labels_and_wire_names() {
        assert_eq!(TaskStatus::InProgress.as_str(), "in_progress");
        assert_eq!(TaskStatus::InProgress.label(), "In Progress");
        assert_eq!("in-progress".parse::<TaskStatus>().unwrap(), TaskStatus::InProgress);
        assert_eq!("HIGH".parse::<TaskPriority>().unwrap(), TaskPriority::High);
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }
}
