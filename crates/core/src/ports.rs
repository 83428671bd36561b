//! Port interfaces for the remote API and local token persistence
//!
//! These traits define the boundaries between client logic and the
//! infrastructure adapters (HTTP, filesystem).

use async_trait::async_trait;
use tasktime_domain::{
    AuthResponse, Credentials, NewTask, PeriodSummary, Registration, Result, SummaryQuery, Task,
    TaskId, TaskQuery, TaskUpdate, TimeEntry, TimerStartResponse, TimerStopResponse, User,
};

/// Remote task-tracking API
///
/// Every call is a single attempt; failures come back as
/// [`tasktime_domain::TaskTimeError`] with the server detail preserved.
#[async_trait]
pub trait TaskTimeApi: Send + Sync {
    /// Create an account and receive a token
    async fn register(&self, registration: &Registration) -> Result<AuthResponse>;

    /// Exchange credentials for a token
    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse>;

    /// Resolve the user behind the stored token
    async fn current_user(&self) -> Result<User>;

    /// List tasks, filtered server-side
    async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>>;

    async fn get_task(&self, id: TaskId) -> Result<Task>;

    async fn create_task(&self, task: &NewTask) -> Result<Task>;

    async fn update_task(&self, id: TaskId, update: &TaskUpdate) -> Result<Task>;

    /// Delete a task; the server answers with an empty 204
    async fn delete_task(&self, id: TaskId) -> Result<()>;

    /// Open a time entry for the task
    async fn start_timer(&self, id: TaskId) -> Result<TimerStartResponse>;

    /// Close the task's active time entry
    async fn stop_timer(&self, id: TaskId) -> Result<TimerStopResponse>;

    /// Time entries of a task, newest first
    async fn list_time_entries(&self, id: TaskId) -> Result<Vec<TimeEntry>>;

    async fn time_summary(&self, query: &SummaryQuery) -> Result<PeriodSummary>;
}

/// Persisted bearer token
///
/// Holds at most one token. Implementations must be cheap enough to call on
/// every request.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, token: &str) -> Result<()>;

    /// Remove the token; clearing an empty store succeeds
    fn clear(&self) -> Result<()>;
}
