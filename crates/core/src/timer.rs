//! Elapsed-time display for task timers
//!
//! The shown value is `floor(total) + live`, where `live` is the whole number
//! of seconds between the live origin and now. It is recomputed from the
//! clock every time and never accumulated, so a missed tick cannot drift.

use chrono::{DateTime, Utc};
use tasktime_domain::{whole_seconds, Task, TaskTimeError, TimeEntry};
use thiserror::Error;

const MILLIS_PER_SECOND: u64 = 1_000;

/// Whole seconds elapsed since `origin`; zero when the clock is behind it.
pub fn live_seconds(origin: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let millis = (now - origin).num_milliseconds();
    if millis <= 0 {
        0
    } else {
        millis as u64 / MILLIS_PER_SECOND
    }
}

/// Snapshot of what a timer widget shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerDisplay {
    /// Server-confirmed total of closed entries
    pub total_seconds: f64,
    pub running: bool,
    /// Start of the active entry, when known in this process
    pub origin: Option<DateTime<Utc>>,
}

impl TimerDisplay {
    pub fn new(task: &Task, origin: Option<DateTime<Utc>>) -> Self {
        Self { total_seconds: task.total_time_seconds, running: task.is_timing, origin }
    }

    /// Seconds to show at `now`.
    ///
    /// Live time is added only while running with a known origin.
    pub fn seconds_at(&self, now: DateTime<Utc>) -> u64 {
        let base = whole_seconds(self.total_seconds);
        match (self.running, self.origin) {
            (true, Some(origin)) => base + live_seconds(origin, now),
            _ => base,
        }
    }

    /// Whether the display changes over time
    pub fn is_live(&self) -> bool {
        self.running && self.origin.is_some()
    }
}

/// The task's open entry in its history: the one named by
/// `active_entry_id`, else the first entry still running.
pub fn active_entry<'a>(task: &Task, entries: &'a [TimeEntry]) -> Option<&'a TimeEntry> {
    if !task.is_timing {
        return None;
    }
    match task.active_entry_id {
        Some(active) => entries.iter().find(|entry| entry.id == active),
        None => entries.iter().find(|entry| entry.is_running()),
    }
}

/// Start time of the task's active entry, looked up in its history.
pub fn recover_origin(task: &Task, entries: &[TimeEntry]) -> Option<DateTime<Utc>> {
    active_entry(task, entries).map(|entry| entry.start_time)
}

/// Why a start/stop did not happen
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimerError {
    /// Finished tasks cannot be timed
    #[error("Cannot start a timer on a finished task")]
    TaskDone,

    #[error("Timer is already running")]
    AlreadyRunning,

    #[error("Timer is not running")]
    NotRunning,

    /// A start/stop for this task is still outstanding
    #[error("A timer request is already in progress")]
    RequestPending,

    #[error("Task {0} is not loaded")]
    UnknownTask(i64),

    #[error(transparent)]
    Api(#[from] TaskTimeError),
}

impl TimerError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

impl From<TimerError> for TaskTimeError {
    fn from(err: TimerError) -> Self {
        match err {
            TimerError::Api(inner) => inner,
            other => TaskTimeError::Validation(other.to_string()),
        }
    }
}
