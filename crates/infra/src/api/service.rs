//! HTTP adapter for the [`TaskTimeApi`] port

use std::sync::Arc;

use async_trait::async_trait;
use tasktime_core::{TaskTimeApi, TokenStore};
use tasktime_domain::{
    ApiConfig, AuthResponse, Credentials, NewTask, PeriodSummary, Registration, Result,
    SummaryQuery, Task, TaskId, TaskQuery, TaskUpdate, TimeEntry, TimerStartResponse,
    TimerStopResponse, User,
};
use tracing::info;

use super::auth::StoredTokenProvider;
use super::client::{ApiClient, ApiClientConfig};

/// Remote task tracking service reached over HTTP.
pub struct HttpTaskTimeApi {
    client: ApiClient,
}

impl HttpTaskTimeApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Build the adapter from configuration, reading the bearer token from
    /// `store` on every request.
    pub fn from_config(config: &ApiConfig, store: Arc<dyn TokenStore>) -> Result<Self> {
        let client = ApiClient::new(
            ApiClientConfig::from(config),
            Arc::new(StoredTokenProvider::new(store)),
        )?;
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

fn task_path(id: TaskId) -> String {
    format!("/tasks/{id}")
}

#[async_trait]
impl TaskTimeApi for HttpTaskTimeApi {
    async fn register(&self, registration: &Registration) -> Result<AuthResponse> {
        let response: AuthResponse =
            self.client.post_anonymous("/auth/register", registration).await?;
        info!(user_id = response.user.id, "account registered");
        Ok(response)
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let response: AuthResponse = self.client.post_anonymous("/auth/login", credentials).await?;
        info!(user_id = response.user.id, "logged in");
        Ok(response)
    }

    async fn current_user(&self) -> Result<User> {
        Ok(self.client.get("/auth/me").await?)
    }

    async fn list_tasks(&self, query: &TaskQuery) -> Result<Vec<Task>> {
        Ok(self.client.get_with_query("/tasks", query).await?)
    }

    async fn get_task(&self, id: TaskId) -> Result<Task> {
        Ok(self.client.get(&task_path(id)).await?)
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task> {
        let created: Task = self.client.post("/tasks", task).await?;
        info!(task_id = created.id, "task created");
        Ok(created)
    }

    async fn update_task(&self, id: TaskId, update: &TaskUpdate) -> Result<Task> {
        let updated: Task = self.client.put(&task_path(id), update).await?;
        info!(task_id = id, "task updated");
        Ok(updated)
    }

    async fn delete_task(&self, id: TaskId) -> Result<()> {
        self.client.delete(&task_path(id)).await?;
        info!(task_id = id, "task deleted");
        Ok(())
    }

    async fn start_timer(&self, id: TaskId) -> Result<TimerStartResponse> {
        let response: TimerStartResponse =
            self.client.post_empty(&format!("/tasks/{id}/start")).await?;
        info!(task_id = id, entry_id = response.time_entry.id, "timer started");
        Ok(response)
    }

    async fn stop_timer(&self, id: TaskId) -> Result<TimerStopResponse> {
        let response: TimerStopResponse =
            self.client.post_empty(&format!("/tasks/{id}/stop")).await?;
        info!(task_id = id, duration_seconds = response.duration_seconds, "timer stopped");
        Ok(response)
    }

    async fn list_time_entries(&self, id: TaskId) -> Result<Vec<TimeEntry>> {
        Ok(self.client.get(&format!("/tasks/{id}/time-entries")).await?)
    }

    async fn time_summary(&self, query: &SummaryQuery) -> Result<PeriodSummary> {
        Ok(self.client.get_with_query("/time-summary", query).await?)
    }
}
