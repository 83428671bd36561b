//! Period summary panel

use tasktime_domain::{whole_seconds, PeriodSummary, TaskId};

/// Fetch state of the panel
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SummaryState {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Loaded(PeriodSummary),
}

/// One line of the per-task breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub task_id: TaskId,
    pub title: String,
    pub total_seconds: u64,
    pub entry_count: u32,
    /// Share of the period total, 0..=100
    pub percent: f64,
}

/// What the panel renders
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryView {
    Hidden,
    Loading,
    /// Loaded, but no closed entries in the period
    Empty { period: String, total_seconds: u64 },
    Rows { period: String, total_seconds: u64, rows: Vec<SummaryRow> },
}

#[derive(Debug, Clone, Default)]
pub struct SummaryPanel {
    state: SummaryState,
    /// Last loaded summary, restored when a reload fails
    previous: Option<PeriodSummary>,
}

impl SummaryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SummaryState {
        &self.state
    }

    pub fn begin_loading(&mut self) {
        if let SummaryState::Loaded(summary) = std::mem::take(&mut self.state) {
            self.previous = Some(summary);
        }
        self.state = SummaryState::Loading;
    }

    pub fn finish(&mut self, summary: PeriodSummary) {
        self.previous = None;
        self.state = SummaryState::Loaded(summary);
    }

    /// Drop back to whatever was shown before the failed load.
    pub fn fail(&mut self) {
        self.state = match self.previous.take() {
            Some(summary) => SummaryState::Loaded(summary),
            None => SummaryState::Idle,
        };
    }

    pub fn view(&self) -> SummaryView {
        match &self.state {
            SummaryState::Idle => SummaryView::Hidden,
            SummaryState::Loading => SummaryView::Loading,
            SummaryState::Loaded(summary) => Self::view_of(summary),
        }
    }

    fn view_of(summary: &PeriodSummary) -> SummaryView {
        let period = summary.period.clone();
        let total_seconds = whole_seconds(summary.total_seconds);
        if summary.is_empty() {
            return SummaryView::Empty { period, total_seconds };
        }

        let rows = summary
            .task_summaries
            .iter()
            .map(|item| SummaryRow {
                task_id: item.task_id,
                title: item.task_title.clone(),
                total_seconds: whole_seconds(item.total_seconds),
                entry_count: item.entry_count,
                percent: share(item.total_seconds, summary.total_seconds),
            })
            .collect();
        SummaryView::Rows { period, total_seconds, rows }
    }
}

fn share(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use tasktime_domain::TaskTimeSummary;

    use super::*;

    fn summary(items: Vec<TaskTimeSummary>) -> PeriodSummary {
        PeriodSummary {
            period: "today".into(),
            start_date: "2024-05-01T00:00:00".into(),
            end_date: "2024-05-01T23:59:59".into(),
            total_seconds: items.iter().map(|i| i.total_seconds).sum(),
            task_summaries: items,
        }
    }

    fn item(task_id: TaskId, seconds: f64) -> TaskTimeSummary {
        TaskTimeSummary {
            task_id,
            task_title: format!("Task {task_id}"),
            total_seconds: seconds,
            entry_count: 2,
        }
    }

    #[test]
    fn empty_summary_renders_no_entries_state() {
        let mut panel = SummaryPanel::new();
        assert_eq!(panel.view(), SummaryView::Hidden);

        panel.begin_loading();
        assert_eq!(panel.view(), SummaryView::Loading);

        panel.finish(summary(vec![]));
        assert_eq!(panel.view(), SummaryView::Empty { period: "today".into(), total_seconds: 0 });
    }

    #[test]
    fn rows_carry_share_of_total() {
        let mut panel = SummaryPanel::new();
        panel.finish(summary(vec![item(1, 90.0), item(2, 30.0)]));

        let SummaryView::Rows { total_seconds, rows, .. } = panel.view() else {
            panic!("expected rows");
        };
        assert_eq!(total_seconds, 120);
        assert_eq!(rows[0].percent, 75.0);
        assert_eq!(rows[1].percent, 25.0);
    }

    #[test]
    fn zero_total_yields_zero_percent() {
        let mut panel = SummaryPanel::new();
        panel.finish(summary(vec![item(1, 0.0)]));

        let SummaryView::Rows { rows, .. } = panel.view() else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].percent, 0.0);
    }

    #[test]
    fn failed_reload_restores_previous_summary() {
        let mut panel = SummaryPanel::new();
        panel.finish(summary(vec![item(1, 60.0)]));

        panel.begin_loading();
        panel.fail();
        assert!(matches!(panel.state(), SummaryState::Loaded(s) if s.task_summaries.len() == 1));

        let mut fresh = SummaryPanel::new();
        fresh.begin_loading();
        fresh.fail();
        assert_eq!(fresh.state(), &SummaryState::Idle);
    }
}
