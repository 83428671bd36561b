//! Dashboard page state
//!
//! Owns the task board, one card per loaded task, the list filters, the
//! create form and the summary panel. Listing and summary refreshes keep the
//! previously shown data when they fail; only authentication failures are
//! reported back so the session can end.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tasktime_common::time::Clock;
use tasktime_domain::{
    Result, SummaryPeriod, SummaryQuery, Task, TaskId, TaskPriority, TaskStatus, TaskTimeError,
    TimeEntry,
};
use tracing::{info, warn};

use crate::board::{TaskBoard, TaskStats};
use crate::ports::TaskTimeApi;
use crate::timer::TimerError;
use crate::views::{SubmitError, SummaryPanel, TaskCard, TaskFilter, TaskForm, TimeFilter};

pub struct Dashboard {
    api: Arc<dyn TaskTimeApi>,
    clock: Arc<dyn Clock>,
    board: TaskBoard,
    cards: HashMap<TaskId, TaskCard>,
    filter: TaskFilter,
    time_filter: TimeFilter,
    summary: SummaryPanel,
    form: TaskForm,
    loading: bool,
}

impl Dashboard {
    pub fn new(api: Arc<dyn TaskTimeApi>, clock: Arc<dyn Clock>) -> Self {
        Self {
            api,
            clock,
            board: TaskBoard::new(),
            cards: HashMap::new(),
            filter: TaskFilter::default(),
            time_filter: TimeFilter::new(),
            summary: SummaryPanel::new(),
            form: TaskForm::new(),
            loading: false,
        }
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub fn tasks(&self) -> &[Task] {
        self.board.tasks()
    }

    pub fn stats(&self) -> TaskStats {
        self.board.stats()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn card(&self, id: TaskId) -> Option<&TaskCard> {
        self.cards.get(&id)
    }

    pub fn card_mut(&mut self, id: TaskId) -> Option<&mut TaskCard> {
        self.cards.get_mut(&id)
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Change filters without refetching; call [`Self::load_tasks`] after.
    pub fn filter_mut(&mut self) -> &mut TaskFilter {
        &mut self.filter
    }

    pub fn time_filter(&self) -> &TimeFilter {
        &self.time_filter
    }

    pub fn summary(&self) -> &SummaryPanel {
        &self.summary
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    /// Initial load: tasks with the current filters and today's summary.
    pub async fn mount(&mut self) -> Result<()> {
        self.refresh_tasks().await?;
        self.select_period(SummaryPeriod::Today).await
    }

    /// Fetch the list with the current filters, reporting every failure.
    ///
    /// For one-shot views that have no previous data to fall back on.
    pub async fn load_tasks(&mut self) -> Result<()> {
        self.loading = true;
        let result = self.api.list_tasks(&self.filter.query()).await;
        self.loading = false;

        self.replace_tasks(result?);
        Ok(())
    }

    /// Refetch the list with the current filters.
    pub async fn refresh_tasks(&mut self) -> Result<()> {
        self.loading = true;
        let result = self.api.list_tasks(&self.filter.query()).await;
        self.loading = false;

        match result {
            Ok(tasks) => {
                self.replace_tasks(tasks);
                Ok(())
            }
            Err(err) => Self::swallow("task list", err),
        }
    }

    pub async fn set_status_filter(&mut self, status: Option<TaskStatus>) -> Result<()> {
        if self.filter.set_status(status) {
            self.refresh_tasks().await?;
        }
        Ok(())
    }

    pub async fn set_priority_filter(&mut self, priority: Option<TaskPriority>) -> Result<()> {
        if self.filter.set_priority(priority) {
            self.refresh_tasks().await?;
        }
        Ok(())
    }

    /// Submit the create form; the new task goes to the head of the list.
    pub async fn create_task(&mut self) -> std::result::Result<Task, SubmitError> {
        let body = self.form.to_new_task()?;
        let task = self.api.create_task(&body).await?;
        info!(task_id = task.id, "Task created");

        self.cards.insert(task.id, TaskCard::new(&task, self.clock.clone()));
        self.board.insert_created(task.clone());
        self.form.reset();
        Ok(task)
    }

    pub async fn start_timer(&mut self, id: TaskId) -> std::result::Result<(), TimerError> {
        let card = self.cards.get_mut(&id).ok_or(TimerError::UnknownTask(id))?;
        card.start(self.api.as_ref(), &mut self.board).await
    }

    pub async fn stop_timer(&mut self, id: TaskId) -> std::result::Result<(), TimerError> {
        let card = self.cards.get_mut(&id).ok_or(TimerError::UnknownTask(id))?;
        card.stop(self.api.as_ref(), &mut self.board).await
    }

    /// Enter edit mode on a card
    pub fn begin_edit(&mut self, id: TaskId) -> Option<&mut TaskForm> {
        let task = self.board.get(id)?;
        let card = self.cards.get_mut(&id)?;
        Some(card.begin_edit(task))
    }

    pub async fn save_edit(&mut self, id: TaskId) -> std::result::Result<Task, SubmitError> {
        let card = self.cards.get_mut(&id).ok_or_else(|| unknown(id))?;
        card.save_edit(self.api.as_ref(), &mut self.board).await
    }

    /// Delete a task the user already confirmed.
    pub async fn delete_task(&mut self, id: TaskId) -> Result<()> {
        let card = self.cards.get_mut(&id).ok_or_else(|| unknown(id))?;
        card.delete(self.api.as_ref(), &mut self.board).await?;
        self.cards.remove(&id);
        Ok(())
    }

    pub async fn toggle_history(&mut self, id: TaskId) -> Result<Option<&[TimeEntry]>> {
        let card = self.cards.get_mut(&id).ok_or_else(|| unknown(id))?;
        card.toggle_history(self.api.as_ref()).await
    }

    /// Recover live origins for timers started outside this process.
    pub async fn recover_running_timers(&mut self) -> Result<()> {
        let running: Vec<TaskId> = self
            .board
            .tasks()
            .iter()
            .filter(|task| task.is_timing)
            .map(|task| task.id)
            .collect();

        for id in running {
            let Some(card) = self.cards.get_mut(&id) else {
                continue;
            };
            if let Err(err) = card.recover_origin(self.api.as_ref(), &self.board).await {
                Self::swallow("timer origin", err)?;
            }
        }
        Ok(())
    }

    /// Pick a summary period; presets fetch right away.
    pub async fn select_period(&mut self, period: SummaryPeriod) -> Result<()> {
        match self.time_filter.select(period) {
            Some(query) => self.refresh_summary(query).await,
            None => Ok(()),
        }
    }

    pub fn set_custom_range(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.time_filter.set_start_date(start);
        self.time_filter.set_end_date(end);
    }

    /// Fetch the custom range; does nothing until both dates are set.
    pub async fn apply_custom_range(&mut self) -> Result<()> {
        match self.time_filter.apply() {
            Some(query) => self.refresh_summary(query).await,
            None => Ok(()),
        }
    }

    pub async fn refresh_summary(&mut self, query: SummaryQuery) -> Result<()> {
        self.summary.begin_loading();
        match self.api.time_summary(&query).await {
            Ok(summary) => {
                self.summary.finish(summary);
                Ok(())
            }
            Err(err) => {
                self.summary.fail();
                Self::swallow("time summary", err)
            }
        }
    }

    fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.cards.retain(|id, _| tasks.iter().any(|task| task.id == *id));
        for task in &tasks {
            match self.cards.get_mut(&task.id) {
                Some(card) => card.sync(task),
                None => {
                    self.cards.insert(task.id, TaskCard::new(task, self.clock.clone()));
                }
            }
        }
        self.board.replace_all(tasks);
    }

    fn swallow(what: &str, err: TaskTimeError) -> Result<()> {
        if err.is_auth() {
            return Err(err);
        }
        warn!(error = %err, "Failed to refresh {what}, keeping previous data");
        Ok(())
    }
}

fn unknown(id: TaskId) -> TaskTimeError {
    TaskTimeError::Validation(format!("Task {id} is not loaded"))
}
