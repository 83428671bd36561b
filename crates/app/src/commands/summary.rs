use std::io::Write;

use chrono::NaiveDate;
use tasktime_core::SummaryPanel;
use tasktime_domain::{SummaryPeriod, SummaryQuery};

use super::tasks::{displayed, loaded_dashboard};
use super::CommandResult;
use crate::context::AppContext;
use crate::render;

pub(super) async fn summary(
    ctx: &AppContext,
    out: &mut dyn Write,
    period: SummaryPeriod,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> CommandResult {
    let query = match (from, to) {
        (Some(start), Some(end)) => SummaryQuery::custom(start, end),
        _ => SummaryQuery::preset(period),
    };

    let mut panel = SummaryPanel::new();
    panel.begin_loading();
    panel.finish(ctx.api.time_summary(&query).await?);

    writeln!(out, "{}", render::summary(&panel.view()))?;
    Ok(())
}

/// Counts, the full task list and today's summary.
pub(super) async fn dashboard(ctx: &AppContext, out: &mut dyn Write) -> CommandResult {
    let mut dashboard = loaded_dashboard(ctx).await?;
    dashboard.select_period(SummaryPeriod::Today).await?;

    if let Some(user) = ctx.session.user() {
        writeln!(out, "Signed in as {}", user.username)?;
    }
    writeln!(out, "{}", render::stats(&dashboard.stats()))?;
    writeln!(out)?;
    writeln!(out, "{}", render::task_list(&displayed(&dashboard)))?;

    let summary = render::summary(&dashboard.summary().view());
    if !summary.is_empty() {
        writeln!(out)?;
        writeln!(out, "{summary}")?;
    }
    Ok(())
}
