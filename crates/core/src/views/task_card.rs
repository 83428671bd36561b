//! Task card: timer widget, history and inline edit for one task
//!
//! The card owns the live origin of a running timer and the one-second
//! ticker that republishes the display. The task record itself lives in the
//! [`TaskBoard`]; the card merges confirmed results into it.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tasktime_common::time::{recurring_now, Clock, TimerGuard};
use tasktime_domain::constants::TIMER_TICK_MS;
use tasktime_domain::{Task, TaskId, TaskTimeError, TimeEntry, TimeEntryId};
use tokio::sync::watch;
use tracing::{debug, info};

use super::task_form::TaskForm;
use super::SubmitError;
use crate::board::TaskBoard;
use crate::ports::TaskTimeApi;
use crate::timer::{active_entry, TimerDisplay, TimerError};

pub struct TaskCard {
    task_id: TaskId,
    clock: Arc<dyn Clock>,
    origin: Option<DateTime<Utc>>,
    /// Entry the origin belongs to
    origin_entry: Option<TimeEntryId>,
    pending: bool,
    ticker: TimerGuard,
    display: Arc<watch::Sender<u64>>,
    history: Option<Vec<TimeEntry>>,
    edit: Option<TaskForm>,
}

impl TaskCard {
    pub fn new(task: &Task, clock: Arc<dyn Clock>) -> Self {
        let initial = TimerDisplay::new(task, None).seconds_at(clock.now());
        let (display, _) = watch::channel(initial);
        Self {
            task_id: task.id,
            clock,
            origin: None,
            origin_entry: None,
            pending: false,
            ticker: TimerGuard::empty(),
            display: Arc::new(display),
            history: None,
            edit: None,
        }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Start of the running entry, when known
    pub fn origin(&self) -> Option<DateTime<Utc>> {
        self.origin
    }

    /// A start/stop request is outstanding; the controls are disabled
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the per-second ticker is live
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    pub fn display(&self, task: &Task) -> TimerDisplay {
        TimerDisplay::new(task, self.origin)
    }

    /// Seconds shown right now
    pub fn display_seconds(&self, task: &Task) -> u64 {
        self.display(task).seconds_at(self.clock.now())
    }

    /// Displayed seconds, republished on every tick
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.display.subscribe()
    }

    /// Whether the Start control is enabled
    pub fn can_start(&self, task: &Task) -> Result<(), TimerError> {
        if task.is_done() {
            return Err(TimerError::TaskDone);
        }
        if task.is_timing {
            return Err(TimerError::AlreadyRunning);
        }
        if self.pending {
            return Err(TimerError::RequestPending);
        }
        Ok(())
    }

    /// Whether the Stop control is enabled
    pub fn can_stop(&self, task: &Task) -> Result<(), TimerError> {
        if !task.is_timing {
            return Err(TimerError::NotRunning);
        }
        if self.pending {
            return Err(TimerError::RequestPending);
        }
        Ok(())
    }

    /// Follow a server-side replacement of the task record.
    ///
    /// The origin is dropped when the task stopped or now runs a different
    /// entry; [`TaskCard::recover_origin`] re-anchors it.
    pub fn sync(&mut self, task: &Task) {
        let other_entry = match (task.active_entry_id, self.origin_entry) {
            (Some(active), Some(anchored)) => active != anchored,
            _ => false,
        };
        if !task.is_timing || other_entry {
            self.clear_origin();
        }
        self.restart_ticker(task);
    }

    /// Recover the origin of a timer started elsewhere from its history.
    ///
    /// Returns whether an origin is known afterwards.
    pub async fn recover_origin(
        &mut self,
        api: &dyn TaskTimeApi,
        board: &TaskBoard,
    ) -> Result<bool, TaskTimeError> {
        let Some(task) = board.get(self.task_id) else {
            return Ok(false);
        };
        if !task.is_timing || self.origin.is_some() {
            return Ok(self.origin.is_some());
        }

        let entries = api.list_time_entries(self.task_id).await?;
        let active = active_entry(task, &entries);
        self.origin = active.map(|entry| entry.start_time);
        self.origin_entry = active.map(|entry| entry.id);
        debug!(task_id = self.task_id, recovered = self.origin.is_some(), "Recovered timer origin");
        self.history = Some(entries);
        self.restart_ticker(task);
        Ok(self.origin.is_some())
    }

    /// Start the timer and merge the new running entry.
    ///
    /// On failure nothing changes.
    pub async fn start(
        &mut self,
        api: &dyn TaskTimeApi,
        board: &mut TaskBoard,
    ) -> Result<(), TimerError> {
        let task = board.get(self.task_id).ok_or(TimerError::UnknownTask(self.task_id))?;
        self.can_start(task)?;

        self.pending = true;
        let result = api.start_timer(self.task_id).await;
        self.pending = false;
        let response = result?;

        let entry = response.time_entry;
        self.origin = Some(entry.start_time);
        self.origin_entry = Some(entry.id);
        if let Some(task) = board.mark_started(self.task_id, &entry) {
            info!(task_id = task.id, entry_id = entry.id, "Timer started");
            let task = task.clone();
            self.restart_ticker(&task);
        }
        self.invalidate_history();
        Ok(())
    }

    /// Stop the timer and fold the closed entry into the total.
    ///
    /// On failure the task stays running with its total unchanged.
    pub async fn stop(
        &mut self,
        api: &dyn TaskTimeApi,
        board: &mut TaskBoard,
    ) -> Result<(), TimerError> {
        let task = board.get(self.task_id).ok_or(TimerError::UnknownTask(self.task_id))?;
        self.can_stop(task)?;

        self.pending = true;
        let result = api.stop_timer(self.task_id).await;
        self.pending = false;
        let response = result?;

        self.clear_origin();
        self.ticker.cancel();
        if let Some(task) = board.mark_stopped(self.task_id, response.duration_seconds) {
            info!(
                task_id = task.id,
                duration_seconds = response.duration_seconds,
                "Timer stopped"
            );
            let folded = TimerDisplay::new(task, None).seconds_at(self.clock.now());
            self.display.send_replace(folded);
        }
        self.invalidate_history();
        Ok(())
    }

    /// Shown history, if expanded
    pub fn history(&self) -> Option<&[TimeEntry]> {
        self.history.as_deref()
    }

    /// Fetch and show the time entries, newest first.
    pub async fn load_history(
        &mut self,
        api: &dyn TaskTimeApi,
    ) -> Result<&[TimeEntry], TaskTimeError> {
        let entries = api.list_time_entries(self.task_id).await?;
        let shown = self.history.insert(entries);
        Ok(shown.as_slice())
    }

    /// Expand (fetching) or collapse the history.
    pub async fn toggle_history(
        &mut self,
        api: &dyn TaskTimeApi,
    ) -> Result<Option<&[TimeEntry]>, TaskTimeError> {
        if self.history.take().is_some() {
            return Ok(None);
        }
        self.load_history(api).await.map(Some)
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Enter edit mode prefilled from the task
    pub fn begin_edit(&mut self, task: &Task) -> &mut TaskForm {
        self.edit.insert(TaskForm::from_task(task))
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut TaskForm> {
        self.edit.as_mut()
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Save the edit form; the board then holds exactly the server record.
    ///
    /// Stays in edit mode on failure.
    pub async fn save_edit(
        &mut self,
        api: &dyn TaskTimeApi,
        board: &mut TaskBoard,
    ) -> Result<Task, SubmitError> {
        let Some(form) = self.edit.as_ref() else {
            return Err(SubmitError::Api(TaskTimeError::Internal("card is not in edit mode".into())));
        };
        let update = form.to_update()?;

        let saved = api.update_task(self.task_id, &update).await?;
        info!(task_id = saved.id, "Task updated");
        board.apply_update(saved.clone());
        self.edit = None;
        self.sync(&saved);
        Ok(saved)
    }

    /// Delete the task. The caller confirms first and drops the card after.
    pub async fn delete(
        &mut self,
        api: &dyn TaskTimeApi,
        board: &mut TaskBoard,
    ) -> Result<(), TaskTimeError> {
        api.delete_task(self.task_id).await?;
        info!(task_id = self.task_id, "Task deleted");
        self.ticker.cancel();
        self.clear_origin();
        board.remove(self.task_id);
        Ok(())
    }

    fn clear_origin(&mut self) {
        self.origin = None;
        self.origin_entry = None;
    }

    fn invalidate_history(&mut self) {
        self.history = None;
    }

    /// Replace the ticker so it reflects `task`; no ticker unless live.
    fn restart_ticker(&mut self, task: &Task) {
        self.ticker.cancel();

        let display = self.display(task);
        if !display.is_live() {
            self.display.send_replace(display.seconds_at(self.clock.now()));
            return;
        }

        let clock = self.clock.clone();
        let sender = self.display.clone();
        self.ticker = recurring_now(Duration::from_millis(TIMER_TICK_MS), move || {
            sender.send_replace(display.seconds_at(clock.now()));
        })
        .guard();
    }
}

impl std::fmt::Debug for TaskCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskCard")
            .field("task_id", &self.task_id)
            .field("origin", &self.origin)
            .field("origin_entry", &self.origin_entry)
            .field("pending", &self.pending)
            .field("ticking", &self.is_ticking())
            .finish()
    }
}
