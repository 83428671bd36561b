//! In-memory task cache
//!
//! Holds the tasks of the current listing in display order. It changes only
//! through merges that follow a confirmed server response.

use tasktime_domain::{Task, TaskId, TaskStatus, TimeEntry};

/// Counts over the loaded tasks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub done: usize,
}

/// Ordered task cache keyed by id
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Replace the whole listing after a fetch.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// A freshly created task goes to the head of the list.
    pub fn insert_created(&mut self, task: Task) {
        self.tasks.retain(|existing| existing.id != task.id);
        self.tasks.insert(0, task);
    }

    /// Swap in the server record, keeping its position. Unknown ids are ignored.
    pub fn apply_update(&mut self, task: Task) -> bool {
        match self.get_mut(task.id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Merge a confirmed timer start.
    pub fn mark_started(&mut self, id: TaskId, entry: &TimeEntry) -> Option<&Task> {
        let task = self.get_mut(id)?;
        task.is_timing = true;
        task.active_entry_id = Some(entry.id);
        Some(task)
    }

    /// Merge a confirmed timer stop, folding the closed entry into the total.
    pub fn mark_stopped(&mut self, id: TaskId, duration_seconds: f64) -> Option<&Task> {
        let task = self.get_mut(id)?;
        task.total_time_seconds += duration_seconds;
        task.is_timing = false;
        task.active_entry_id = None;
        Some(task)
    }

    pub fn stats(&self) -> TaskStats {
        let count = |status: TaskStatus| self.tasks.iter().filter(|t| t.status == status).count();
        TaskStats {
            total: self.tasks.len(),
            pending: count(TaskStatus::Pending),
            in_progress: count(TaskStatus::InProgress),
            done: count(TaskStatus::Done),
        }
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == id)
    }
}
