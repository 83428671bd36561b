//! Period summary aggregates
//!
//! Derived read-only data recomputed by the server on every fetch.

use serde::{Deserialize, Serialize};

use super::task::TaskId;
use crate::impl_wire_name_conversions;

/// Reporting window for `/time-summary`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryPeriod {
    #[default]
    Today,
    ThisWeek,
    ThisMonth,
    Custom,
}

impl_wire_name_conversions!(SummaryPeriod {
    Today => "today",
    ThisWeek => "this_week",
    ThisMonth => "this_month",
    Custom => "custom",
});

impl SummaryPeriod {
    /// Presets that can be fetched without extra input.
    pub const PRESETS: [Self; 3] = [Self::Today, Self::ThisWeek, Self::ThisMonth];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::Custom => "Custom",
        }
    }
}

/// Per-task subtotal inside a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskTimeSummary {
    pub task_id: TaskId,
    pub task_title: String,
    pub total_seconds: f64,
    pub entry_count: u32,
}

/// Aggregate returned by `/time-summary`
///
/// `start_date`/`end_date` are echoed as the server formatted them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period: String,
    pub start_date: String,
    pub end_date: String,
    pub total_seconds: f64,
    #[serde(default)]
    pub task_summaries: Vec<TaskTimeSummary>,
}

impl PeriodSummary {
    /// No closed entries fell inside the period.
    pub fn is_empty(&self) -> bool {
        self.task_summaries.is_empty()
    }
}
