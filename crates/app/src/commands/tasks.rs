use std::io::{BufRead, Write};

use tasktime_common::time::Clock;
use tasktime_core::{recover_origin, Dashboard, TimerDisplay};
use tasktime_domain::{TaskId, TaskPriority, TaskStatus};

use super::{CommandError, CommandResult};
use crate::context::AppContext;
use crate::render;
use crate::utils::prompt;

pub(super) struct NewTaskArgs {
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub due: Option<String>,
}

pub(super) struct EditArgs {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub due: Option<String>,
    pub clear_due: bool,
}

/// Dashboard with every task loaded and running timers anchored.
pub(super) async fn loaded_dashboard(ctx: &AppContext) -> Result<Dashboard, CommandError> {
    let mut dashboard = ctx.dashboard();
    dashboard.load_tasks().await?;
    dashboard.recover_running_timers().await?;
    Ok(dashboard)
}

pub(super) fn ensure_loaded(dashboard: &Dashboard, id: TaskId) -> CommandResult {
    if dashboard.board().contains(id) {
        Ok(())
    } else {
        Err(CommandError::NotFound(id))
    }
}

pub(super) async fn list(
    ctx: &AppContext,
    out: &mut dyn Write,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
) -> CommandResult {
    let mut dashboard = ctx.dashboard();
    dashboard.filter_mut().set_status(status);
    dashboard.filter_mut().set_priority(priority);
    dashboard.load_tasks().await?;
    dashboard.recover_running_timers().await?;

    writeln!(out, "{}", render::task_list(&displayed(&dashboard)))?;
    Ok(())
}

/// Tasks paired with their displayed timer value.
pub(super) fn displayed(dashboard: &Dashboard) -> Vec<(&tasktime_domain::Task, u64)> {
    dashboard
        .tasks()
        .iter()
        .map(|task| {
            let seconds = dashboard
                .card(task.id)
                .map_or_else(|| task.total_whole_seconds(), |card| card.display_seconds(task));
            (task, seconds)
        })
        .collect()
}

pub(super) async fn show(ctx: &AppContext, out: &mut dyn Write, id: TaskId) -> CommandResult {
    let task = ctx.api.get_task(id).await?;

    let origin = if task.is_timing {
        let entries = ctx.api.list_time_entries(id).await?;
        recover_origin(&task, &entries)
    } else {
        None
    };
    let seconds = TimerDisplay::new(&task, origin).seconds_at(ctx.clock.now());

    writeln!(out, "{}", render::task_detail(&task, seconds))?;
    Ok(())
}

pub(super) async fn add(ctx: &AppContext, out: &mut dyn Write, args: NewTaskArgs) -> CommandResult {
    let mut dashboard = ctx.dashboard();
    let form = dashboard.form_mut();
    form.open();
    form.title = args.title;
    form.description = args.description.unwrap_or_default();
    form.priority = args.priority;
    form.due_date = args.due.unwrap_or_default();

    let task = dashboard.create_task().await?;
    writeln!(out, "Created {}", render::task_line(&task, task.total_whole_seconds()))?;
    Ok(())
}

pub(super) async fn edit(
    ctx: &AppContext,
    out: &mut dyn Write,
    id: TaskId,
    args: EditArgs,
) -> CommandResult {
    let mut dashboard = loaded_dashboard(ctx).await?;
    let form = dashboard.begin_edit(id).ok_or(CommandError::NotFound(id))?;

    if let Some(title) = args.title {
        form.title = title;
    }
    if let Some(description) = args.description {
        form.description = description;
    }
    if let Some(priority) = args.priority {
        form.priority = priority;
    }
    if let Some(status) = args.status {
        form.status = status;
    }
    if let Some(due) = args.due {
        form.due_date = due;
    }
    if args.clear_due {
        form.due_date.clear();
    }

    let saved = dashboard.save_edit(id).await?;
    let seconds = dashboard
        .card(id)
        .map_or(saved.total_whole_seconds(), |card| card.display_seconds(&saved));
    writeln!(out, "Updated {}", render::task_line(&saved, seconds))?;
    Ok(())
}

pub(super) async fn delete(
    ctx: &AppContext,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
    id: TaskId,
    confirmed: bool,
) -> CommandResult {
    let mut dashboard = loaded_dashboard(ctx).await?;
    let title = dashboard
        .board()
        .get(id)
        .map(|task| task.title.clone())
        .ok_or(CommandError::NotFound(id))?;

    if !confirmed && !prompt::confirm(&format!("Delete task #{id} \"{title}\"?"), input)? {
        return Err(CommandError::Aborted);
    }

    dashboard.delete_task(id).await?;
    writeln!(out, "Deleted #{id} {title}")?;
    Ok(())
}

pub(super) async fn history(ctx: &AppContext, out: &mut dyn Write, id: TaskId) -> CommandResult {
    let mut dashboard = ctx.dashboard();
    dashboard.load_tasks().await?;
    ensure_loaded(&dashboard, id)?;

    let entries = dashboard.toggle_history(id).await?.unwrap_or_default();
    writeln!(out, "{}", render::history(entries))?;
    Ok(())
}
