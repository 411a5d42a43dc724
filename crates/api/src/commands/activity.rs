//! Activity feed commands

use std::sync::Arc;
use std::time::Instant;

use devpulse_domain::constants::DEFAULT_ACTIVITY_LIMIT;
use devpulse_domain::{Activity, ActivityWithProject, Result};

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Get the most recent activities across all projects, enriched with
/// project display fields
pub async fn recent_activity(
    ctx: &Arc<AppContext>,
    limit: Option<usize>,
) -> Result<Vec<ActivityWithProject>> {
    let start = Instant::now();
    let limit = limit.unwrap_or(DEFAULT_ACTIVITY_LIMIT);

    let result = ctx.catalog.recent_activity_with_project(limit).await;
    log_command_execution("activity::recent_activity", start.elapsed(), result.is_ok());
    result
}

/// Get all activities for one project, newest first
pub async fn project_activity(ctx: &Arc<AppContext>, project_id: &str) -> Result<Vec<Activity>> {
    let start = Instant::now();
    let result = ctx.catalog.project_activity(project_id).await;
    log_command_execution("activity::project_activity", start.elapsed(), result.is_ok());
    result
}
