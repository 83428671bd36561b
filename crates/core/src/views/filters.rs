//! Task list filters and the summary period picker

use chrono::NaiveDate;
use tasktime_domain::{SummaryPeriod, SummaryQuery, TaskPriority, TaskQuery, TaskStatus};

/// Status/priority filter over the task list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskFilter {
    /// Returns whether the filter changed, i.e. a refetch is due.
    pub fn set_status(&mut self, status: Option<TaskStatus>) -> bool {
        let changed = self.status != status;
        self.status = status;
        changed
    }

    pub fn set_priority(&mut self, priority: Option<TaskPriority>) -> bool {
        let changed = self.priority != priority;
        self.priority = priority;
        changed
    }

    pub fn query(&self) -> TaskQuery {
        TaskQuery { status: self.status, priority: self.priority }
    }
}

/// Period picker for the time summary
///
/// Presets apply as soon as they are picked. A custom range applies only
/// once both ends are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeFilter {
    period: SummaryPeriod,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl TimeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn period(&self) -> SummaryPeriod {
        self.period
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Pick a period. Presets yield the query to fetch right away.
    pub fn select(&mut self, period: SummaryPeriod) -> Option<SummaryQuery> {
        self.period = period;
        match period {
            SummaryPeriod::Custom => None,
            preset => Some(SummaryQuery::preset(preset)),
        }
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
    }

    /// The Apply control is enabled
    pub fn can_apply(&self) -> bool {
        self.period == SummaryPeriod::Custom
            && self.start_date.is_some()
            && self.end_date.is_some()
    }

    /// Custom range query, once both dates are set
    pub fn apply(&self) -> Option<SummaryQuery> {
        if !self.can_apply() {
            return None;
        }
        Some(SummaryQuery::custom(self.start_date?, self.end_date?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_filter_reports_changes() {
        let mut filter = TaskFilter::default();
        assert!(filter.set_status(Some(TaskStatus::Done)));
        assert!(!filter.set_status(Some(TaskStatus::Done)));
        assert!(filter.set_priority(Some(TaskPriority::High)));
        assert_eq!(
            filter.query(),
            TaskQuery { status: Some(TaskStatus::Done), priority: Some(TaskPriority::High) }
        );
    }

    #[test]
    fn presets_fetch_immediately() {
        let mut filter = TimeFilter::new();
        for preset in SummaryPeriod::PRESETS {
            assert_eq!(filter.select(preset), Some(SummaryQuery::preset(preset)));
        }
    }

    #[test]
    fn custom_waits_for_both_dates() {
        let mut filter = TimeFilter::new();
        assert_eq!(filter.select(SummaryPeriod::Custom), None);
        assert!(filter.apply().is_none());

        let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        filter.set_start_date(Some(start));
        assert!(!filter.can_apply());

        filter.set_end_date(Some(end));
        assert_eq!(filter.apply(), Some(SummaryQuery::custom(start, end)));
    }

    #[test]
    fn dates_do_not_apply_to_presets() {
        let mut filter = TimeFilter::new();
        filter.set_start_date(NaiveDate::from_ymd_opt(2024, 5, 1));
        filter.set_end_date(NaiveDate::from_ymd_opt(2024, 5, 2));
        filter.select(SummaryPeriod::ThisWeek);
        assert!(filter.apply().is_none());
    }
}
