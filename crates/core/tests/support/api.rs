//! In-memory `TaskTimeApi`
//!
//! Keeps a tiny server-side model (tasks, entries, one user) and records every
//! call by name. Failures can be queued per call name.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tasktime_core::ports::TaskTimeApi;
use tasktime_domain::{
    AuthResponse, Credentials, NewTask, PeriodSummary, Registration, Result, SummaryQuery, Task,
    TaskId, TaskQuery, TaskTimeError, TaskUpdate, TimeEntry, TimerStartResponse,
    TimerStopResponse, User,
};

use super::fixtures::{task, ts};

#[derive(Default)]
struct State {
    user: Option<User>,
    tasks: Vec<Task>,
    entries: HashMap<TaskId, Vec<TimeEntry>>,
    summary: Option<PeriodSummary>,
    next_task_id: TaskId,
    next_entry_id: i64,
    start_time: Option<DateTime<Utc>>,
    stop_duration: f64,
    failures: HashMap<&'static str, TaskTimeError>,
    calls: Vec<String>,
    queries: Vec<TaskQuery>,
    summary_queries: Vec<SummaryQuery>,
    updates: Vec<TaskUpdate>,
}

pub struct FakeApi {
    state: Mutex<State>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                next_task_id: 100,
                next_entry_id: 500,
                stop_duration: 60.0,
                ..State::default()
            }),
        }
    }

    pub fn user() -> User {
        User { id: 1, username: "ada".into(), email: "ada@example.com".into(), created_at: ts(0) }
    }

    pub fn with_user(self) -> Self {
        self.state.lock().user = Some(Self::user());
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        self.state.lock().tasks = tasks;
        self
    }

    pub fn with_entries(self, task_id: TaskId, entries: Vec<TimeEntry>) -> Self {
        self.state.lock().entries.insert(task_id, entries);
        self
    }

    pub fn with_summary(self, summary: PeriodSummary) -> Self {
        self.state.lock().summary = Some(summary);
        self
    }

    /// Start time reported for the next started entry
    pub fn start_at(&self, start: DateTime<Utc>) {
        self.state.lock().start_time = Some(start);
    }

    /// Duration reported by the next stop
    pub fn stop_after(&self, seconds: f64) {
        self.state.lock().stop_duration = seconds;
    }

    /// Make the next call named `call` fail with `err`
    pub fn fail_next(&self, call: &'static str, err: TaskTimeError) {
        self.state.lock().failures.insert(call, err);
    }

    /// Record an entry opened outside this client
    pub fn push_entry(&self, entry: TimeEntry) {
        self.state.lock().entries.entry(entry.task_id).or_default().insert(0, entry);
    }

    pub fn set_tasks(&self, tasks: Vec<Task>) {
        self.state.lock().tasks = tasks;
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().calls.clone()
    }

    pub fn call_count(&self, call: &str) -> usize {
        self.state.lock().calls.iter().filter(|c| c.as_str() == call).count()
    }

    pub fn last_query(&self) -> Option<TaskQuery> {
        self.state.lock().queries.last().copied()
    }

    pub fn last_summary_query(&self) -> Option<SummaryQuery> {
        self.state.lock().summary_queries.last().copied()
    }

    pub fn last_update(&self) -> Option<TaskUpdate> {
        self.state.lock().updates.last().cloned()
    }

    fn enter(&self, call: &'static str) -> Result<()> {
        let mut state = self.state.lock();
        state.calls.push(call.to_string());
        match state.failures.remove(call) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found() -> TaskTimeError {
        TaskTimeError::Remote { status: 404, message: "Task not found".into() }
    }
}

#[async_trait]
impl TaskTimeApi for FakeApi {
    async fn register(&self, registration: &Registration) -> Result<AuthResponse> {
        self.enter("register")?;
        let user = User {
            id: 2,
            username: registration.username.clone(),
            email: registration.email.clone(),
            created_at: ts(0),
        };
        self.state.lock().user = Some(user.clone());
        Ok(AuthResponse { access_token: "registered-token".into(), token_type: "bearer".into(), user })
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        self.enter("login")?;
        if credentials.password != "secret" {
            return Err(TaskTimeError::Auth("Invalid username or password".into()));
        }
        let user = Self::user();
        self.state.lock().user = Some(user.clone());
        Ok(AuthResponse { access_token: "fresh-token".into(), token_type: "bearer".into(), user })
    }

    async fn current_user(&self) -> Result<User> {
        self.enter("current_user")?;
        self.state
            .lock()
            .user
            .clone()
            .ok_or_else(|| TaskTimeError::Auth("Could not validate credentials".into()))
    }

    async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        self.enter("list_tasks")?;
        let mut state = self.state.lock();
        state.queries.push(*query);
        Ok(state
            .tasks
            .iter()
            .filter(|t| query.status.map_or(true, |s| t.status == s))
            .filter(|t| query.priority.map_or(true, |p| t.priority == p))
            .cloned()
            .collect())
    }

    async fn get_task(&self, id: TaskId) -> Result<Task> {
        self.enter("get_task")?;
        self.state.lock().tasks.iter().find(|t| t.id == id).cloned().ok_or_else(Self::not_found)
    }

    async fn create_task(&self, body: &NewTask) -> Result<Task> {
        self.enter("create_task")?;
        let mut state = self.state.lock();
        let id = state.next_task_id;
        state.next_task_id += 1;

        let mut created = task(id, &body.title);
        created.description = body.description.clone();
        created.priority = body.priority.unwrap_or_default();
        created.status = body.status.unwrap_or_default();
        created.due_date = body.due_date;
        state.tasks.insert(0, created.clone());
        Ok(created)
    }

    async fn update_task(&self, id: TaskId, update: &TaskUpdate) -> Result<Task> {
        self.enter("update_task")?;
        let mut state = self.state.lock();
        state.updates.push(update.clone());
        let stored = state.tasks.iter_mut().find(|t| t.id == id).ok_or_else(Self::not_found)?;
        if let Some(title) = &update.title {
            stored.title = title.clone();
        }
        stored.description = update.description.clone();
        if let Some(priority) = update.priority {
            stored.priority = priority;
        }
        if let Some(status) = update.status {
            stored.status = status;
        }
        if let Some(due_date) = update.due_date {
            stored.due_date = due_date;
        }
        stored.updated_at = Some(ts(3_600));
        Ok(stored.clone())
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        self.enter("delete_task")?;
        let mut state = self.state.lock();
        let before = state.tasks.len();
        state.tasks.retain(|t| t.id != id);
        if state.tasks.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }

    async fn start_timer(&self, id: TaskId) -> Result<TimerStartResponse> {
        self.enter("start_timer")?;
        let mut state = self.state.lock();
        let entry_id = state.next_entry_id;
        state.next_entry_id += 1;
        let start = state.start_time.unwrap_or_else(Utc::now);
        let entry = super::fixtures::entry(entry_id, id, start);
        state.entries.entry(id).or_default().insert(0, entry.clone());
        Ok(TimerStartResponse { message: Some("Timer started".into()), time_entry: entry })
    }

    async fn stop_timer(&self, _id: TaskId) -> Result<TimerStopResponse> {
        self.enter("stop_timer")?;
        let duration = self.state.lock().stop_duration;
        Ok(TimerStopResponse {
            message: Some("Timer stopped".into()),
            time_entry: None,
            duration_seconds: duration,
        })
    }

    async fn list_time_entries(&self, id: TaskId) -> Result<Vec<TimeEntry>> {
        self.enter("list_time_entries")?;
        Ok(self.state.lock().entries.get(&id).cloned().unwrap_or_default())
    }

    async fn time_summary(&self, query: &SummaryQuery) -> Result<PeriodSummary> {
        self.enter("time_summary")?;
        let mut state = self.state.lock();
        state.summary_queries.push(*query);
        Ok(state.summary.clone().unwrap_or_else(|| PeriodSummary {
            period: query.period.as_str().to_string(),
            start_date: "2024-04-20T00:00:00".into(),
            end_date: "2024-04-20T23:59:59".into(),
            total_seconds: 0.0,
            task_summaries: Vec::new(),
        }))
    }
}
