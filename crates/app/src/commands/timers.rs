use std::io::Write;
use std::time::Duration;

use tasktime_common::time::format_duration;
use tasktime_domain::constants::TIMER_TICK_MS;
use tasktime_domain::TaskId;
use tokio::sync::watch;
use tracing::debug;

use super::tasks::{ensure_loaded, loaded_dashboard};
use super::CommandResult;
use crate::context::AppContext;

/// How often `watch` refetches the list to notice timers stopped elsewhere
const WATCH_REFRESH_SECS: u64 = 15;

pub(super) async fn start(ctx: &AppContext, out: &mut dyn Write, id: TaskId) -> CommandResult {
    let mut dashboard = loaded_dashboard(ctx).await?;
    ensure_loaded(&dashboard, id)?;

    dashboard.start_timer(id).await?;
    if let Some(task) = dashboard.board().get(id) {
        writeln!(out, "Started timer on #{} {}", task.id, task.title)?;
    }
    Ok(())
}

pub(super) async fn stop(ctx: &AppContext, out: &mut dyn Write, id: TaskId) -> CommandResult {
    let mut dashboard = loaded_dashboard(ctx).await?;
    ensure_loaded(&dashboard, id)?;

    dashboard.stop_timer(id).await?;
    if let (Some(task), Some(card)) = (dashboard.board().get(id), dashboard.card(id)) {
        writeln!(
            out,
            "Stopped timer on #{} {} (total {})",
            task.id,
            task.title,
            format_duration(card.display_seconds(task))
        )?;
    }
    Ok(())
}

/// Redraw the watched timers once per tick until Ctrl-C or until none of
/// them is running any more.
pub(super) async fn watch(
    ctx: &AppContext,
    out: &mut dyn Write,
    ids: Vec<TaskId>,
) -> CommandResult {
    let mut dashboard = loaded_dashboard(ctx).await?;

    let watched: Vec<TaskId> = if ids.is_empty() {
        dashboard.tasks().iter().filter(|task| task.is_timing).map(|task| task.id).collect()
    } else {
        for id in &ids {
            ensure_loaded(&dashboard, *id)?;
        }
        ids
    };

    let mut displays: Vec<(TaskId, watch::Receiver<u64>)> = watched
        .iter()
        .filter_map(|id| dashboard.card(*id).map(|card| (*id, card.subscribe())))
        .collect();

    if !watched.iter().any(|id| is_running(&dashboard, *id)) {
        writeln!(out, "No running timers")?;
        return Ok(());
    }

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut redraw = tokio::time::interval(Duration::from_millis(TIMER_TICK_MS));
    let mut refresh = tokio::time::interval(Duration::from_secs(WATCH_REFRESH_SECS));
    refresh.tick().await;

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                debug!("watch interrupted");
                break;
            }
            _ = redraw.tick() => {
                let line = displays
                    .iter_mut()
                    .filter_map(|(id, display)| {
                        let task = dashboard.board().get(*id)?;
                        let seconds = *display.borrow_and_update();
                        Some(format!("#{} {}  {}", task.id, task.title, format_duration(seconds)))
                    })
                    .collect::<Vec<_>>()
                    .join("  |  ");
                write!(out, "\r{line}\x1b[K")?;
                out.flush()?;
            }
            _ = refresh.tick() => {
                dashboard.refresh_tasks().await?;
                dashboard.recover_running_timers().await?;
                displays.retain(|(id, _)| dashboard.card(*id).is_some());
                if !watched.iter().any(|id| is_running(&dashboard, *id)) {
                    break;
                }
            }
        }
    }

    writeln!(out)?;
    if !watched.iter().any(|id| is_running(&dashboard, *id)) {
        writeln!(out, "All watched timers stopped")?;
    }
    Ok(())
}

fn is_running(dashboard: &tasktime_core::Dashboard, id: TaskId) -> bool {
    dashboard.board().get(id).is_some_and(|task| task.is_timing)
}
