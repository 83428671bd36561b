//! Create/edit form for a task

use tasktime_common::validation::{
    DateValidator, StringValidator, ValidationResult, Validator,
};
use tasktime_domain::constants::{MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};
use tasktime_domain::{NewTask, Task, TaskPriority, TaskStatus, TaskUpdate};

/// Raw form input, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// `YYYY-MM-DD` or blank
    pub due_date: String,
    open: bool,
}

impl TaskForm {
    /// Blank create form with default priority and status
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit form prefilled from a task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            status: task.status,
            due_date: task.due_date.map(|date| date.to_string()).unwrap_or_default(),
            open: true,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Back to defaults, closed
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check every field, reporting all failures at once.
    pub fn validate(&self) -> ValidationResult<()> {
        let title = StringValidator::new()
            .not_empty()
            .max_length(MAX_TITLE_LENGTH)
            .required_message("Title is required");
        let description = StringValidator::new().trim(false).max_length(MAX_DESCRIPTION_LENGTH);

        let mut validator = Validator::new();
        validator
            .validate_field("title", self.title.as_str(), &title)
            .validate_field("description", self.description.as_str(), &description)
            .validate_field("due_date", self.due_date.as_str(), &DateValidator::new());
        validator.finish()
    }

    /// Body for creating a task. Status is left to the server default.
    pub fn to_new_task(&self) -> ValidationResult<NewTask> {
        self.validate()?;
        Ok(NewTask {
            title: self.title.trim().to_string(),
            description: self.description_value(),
            priority: Some(self.priority),
            status: None,
            due_date: self.due_date_value(),
        })
    }

    /// Body for saving an edit. A blank due date clears it.
    pub fn to_update(&self) -> ValidationResult<TaskUpdate> {
        self.validate()?;
        Ok(TaskUpdate {
            title: Some(self.title.trim().to_string()),
            description: self.description_value(),
            priority: Some(self.priority),
            status: Some(self.status),
            due_date: Some(self.due_date_value()),
        })
    }

    fn description_value(&self) -> Option<String> {
        if self.description.trim().is_empty() {
            None
        } else {
            Some(self.description.clone())
        }
    }

    fn due_date_value(&self) -> Option<chrono::NaiveDate> {
        DateValidator::parse(&self.due_date).ok().flatten()
    }
}
