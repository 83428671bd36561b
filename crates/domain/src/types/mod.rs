//! Domain types and models
//!
//! Records exchanged with the remote API. The client holds cached copies only;
//! the server is the source of truth for every field.

pub mod requests;
pub mod summary;
pub mod task;
pub mod time_entry;
pub mod timestamp;
pub mod user;

pub use requests::{Credentials, NewTask, Registration, SummaryQuery, TaskQuery, TaskUpdate};
pub use summary::{PeriodSummary, SummaryPeriod, TaskTimeSummary};
pub use task::{Task, TaskId, TaskPriority, TaskStatus};
pub use time_entry::{TimeEntry, TimeEntryId, TimerStartResponse, TimerStopResponse};
pub use user::{AuthResponse, User};

/// Floor a server-reported float second count into whole seconds.
///
/// Negative and non-finite values collapse to zero.
pub fn whole_seconds(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    }
}
