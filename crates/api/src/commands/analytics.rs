//! Analytics commands
//!
//! Period tokens arrive as raw query strings; unknown or missing values
//! resolve to the 30-day default rather than erroring, so a stale URL
//! still renders.

use std::sync::Arc;
use std::time::Instant;

use devpulse_domain::{
    DailyStats, OverviewStats, Period, PeriodSummary, ProjectBreakdown, Result,
};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Get daily stats for the period identified by a raw query token
pub async fn daily_stats(
    ctx: &Arc<AppContext>,
    period: Option<&str>,
) -> Result<Vec<DailyStats>> {
    let start = Instant::now();
    let result = ctx.analytics.daily_stats_for_period(resolve_period(period)).await;
    log_command_execution("analytics::daily_stats", start.elapsed(), result.is_ok());
    result
}

/// Get the period summary with trend deltas
pub async fn period_summary(
    ctx: &Arc<AppContext>,
    period: Option<&str>,
) -> Result<PeriodSummary> {
    let start = Instant::now();
    let result = ctx.analytics.period_summary(resolve_period(period)).await;
    log_command_execution("analytics::period_summary", start.elapsed(), result.is_ok());
    result
}

/// Get the per-project commit breakdown
pub async fn project_breakdown(ctx: &Arc<AppContext>) -> Result<Vec<ProjectBreakdown>> {
    let start = Instant::now();
    let result = ctx.analytics.project_breakdown().await;
    log_command_execution("analytics::project_breakdown", start.elapsed(), result.is_ok());
    result
}

/// Get the dashboard overview snapshot
pub async fn overview_stats(ctx: &Arc<AppContext>) -> Result<OverviewStats> {
    let start = Instant::now();
    let result = ctx.catalog.overview().await;
    log_command_execution("analytics::overview_stats", start.elapsed(), result.is_ok());
    result
}

fn resolve_period(token: Option<&str>) -> Period {
    token.map_or_else(Period::default, Period::parse)
}
