//! Record builders

use chrono::{DateTime, TimeZone, Utc};
use tasktime_domain::{Task, TaskId, TaskPriority, TaskStatus, TimeEntry, TimeEntryId};

/// Fixed timestamp `2024-04-20T08:00:00Z` plus `seconds`
pub fn ts(seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 20, 8, 0, 0).unwrap() + chrono::Duration::seconds(seconds)
}

pub fn task(id: TaskId, title: &str) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: None,
        priority: TaskPriority::Medium,
        status: TaskStatus::Pending,
        due_date: None,
        user_id: 1,
        created_at: ts(0),
        updated_at: None,
        total_time_seconds: 0.0,
        is_timing: false,
        active_entry_id: None,
    }
}

pub fn entry(id: TimeEntryId, task_id: TaskId, start: DateTime<Utc>) -> TimeEntry {
    TimeEntry {
        id,
        task_id,
        start_time: start,
        end_time: None,
        duration_seconds: None,
        created_at: start,
    }
}
