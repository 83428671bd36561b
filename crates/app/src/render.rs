//! Plain-text rendering of the core views

use std::fmt::Write as _;

use tasktime_common::time::{format_duration, format_optional_duration};
use tasktime_core::views::SummaryView;
use tasktime_core::TaskStats;
use tasktime_domain::constants::{
    MISSING_DURATION_PLACEHOLDER, NO_SUMMARY_ENTRIES, RUNNING_ENTRY_LABEL,
};
use tasktime_domain::{whole_seconds, Task, TimeEntry, User};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn user(user: &User) -> String {
    format!(
        "{} <{}> (id {}, since {})",
        user.username,
        user.email,
        user.id,
        user.created_at.format("%Y-%m-%d")
    )
}

/// One-line task summary; `seconds` is the displayed timer value.
pub fn task_line(task: &Task, seconds: u64) -> String {
    let mut line = format!(
        "#{:<5} {:<12} {:<7} {}",
        task.id,
        format!("[{}]", task.status.label()),
        task.priority.as_str(),
        task.title
    );
    if let Some(due) = task.due_date {
        let _ = write!(line, "  (due {due})");
    }
    let _ = write!(line, "  {}", format_duration(seconds));
    if task.is_timing {
        line.push_str("  ● running");
    }
    line
}

pub fn task_list(tasks: &[(&Task, u64)]) -> String {
    if tasks.is_empty() {
        return "No tasks".to_string();
    }
    tasks.iter().map(|(task, seconds)| task_line(task, *seconds)).collect::<Vec<_>>().join("\n")
}

pub fn task_detail(task: &Task, seconds: u64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", task.id, task.title);
    let _ = writeln!(out, "  Status:    {}", task.status.label());
    let _ = writeln!(out, "  Priority:  {}", task.priority.as_str());
    if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "  About:     {description}");
    }
    let due = task.due_date.map_or_else(|| MISSING_DURATION_PLACEHOLDER.to_string(), |d| d.to_string());
    let _ = writeln!(out, "  Due:       {due}");
    let _ = writeln!(out, "  Created:   {}", task.created_at.format(TIMESTAMP_FORMAT));
    let timer = if task.is_timing { " (running)" } else { "" };
    let _ = write!(out, "  Tracked:   {}{timer}", format_duration(seconds));
    out
}

/// Time entries, newest first as the server returns them.
pub fn history(entries: &[TimeEntry]) -> String {
    if entries.is_empty() {
        return "No time entries".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            let start = entry.start_time.format(TIMESTAMP_FORMAT);
            match entry.end_time {
                Some(end) => format!(
                    "{start} -> {}  {}",
                    end.format(TIMESTAMP_FORMAT),
                    format_optional_duration(
                        entry.duration_seconds.map(whole_seconds),
                        MISSING_DURATION_PLACEHOLDER
                    )
                ),
                None => format!("{start} -> {RUNNING_ENTRY_LABEL}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn stats(stats: &TaskStats) -> String {
    format!(
        "{} tasks: {} pending, {} in progress, {} done",
        stats.total, stats.pending, stats.in_progress, stats.done
    )
}

pub fn summary(view: &SummaryView) -> String {
    match view {
        SummaryView::Hidden => String::new(),
        SummaryView::Loading => "Loading...".to_string(),
        SummaryView::Empty { period, total_seconds } => format!(
            "{}: {}\n{NO_SUMMARY_ENTRIES}",
            period_label(period),
            format_duration(*total_seconds)
        ),
        SummaryView::Rows { period, total_seconds, rows } => {
            let mut out =
                format!("{}: {}", period_label(period), format_duration(*total_seconds));
            for row in rows {
                let _ = write!(
                    out,
                    "\n  #{:<5} {:<30} {:>12}  {:>5.1}%  ({} {})",
                    row.task_id,
                    row.title,
                    format_duration(row.total_seconds),
                    row.percent,
                    row.entry_count,
                    if row.entry_count == 1 { "entry" } else { "entries" }
                );
            }
            out
        }
    }
}

fn period_label(period: &str) -> String {
    period
        .parse::<tasktime_domain::SummaryPeriod>()
        .map_or_else(|_| period.to_string(), |p| p.label().to_string())
}
