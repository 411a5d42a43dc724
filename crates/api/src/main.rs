//! DevPulse - developer analytics dashboard backend
//!
//! Binary entry point: loads configuration, seeds the in-memory store,
//! and logs an overview snapshot so a fresh checkout has something to
//! look at. The dashboard frontend consumes the command layer directly.

use std::sync::Arc;

use devpulse_lib::AppContext;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) => warn!(error = %err, "Could not load .env file"),
    }

    let config = devpulse_infra::loader::load()?;
    info!(
        latency_ms = config.store.simulated_latency_ms,
        seed_enabled = config.seed.enabled,
        "{} starting",
        devpulse_domain::constants::APP_NAME
    );

    let ctx = Arc::new(AppContext::new(config));

    // The dashboard landing page fans these reads out concurrently
    let (overview, feed, projects) = tokio::join!(
        devpulse_lib::overview_stats(&ctx),
        devpulse_lib::recent_activity(&ctx, Some(5)),
        devpulse_lib::list_projects(&ctx),
    );

    let overview = overview?;
    info!(
        total_projects = overview.total_projects,
        active_projects = overview.active_projects,
        total_commits = overview.total_commits,
        total_hours = overview.total_hours,
        recent_activities = overview.recent_activities,
        "Overview snapshot"
    );

    for activity in feed? {
        info!(
            project = %activity.project_name,
            kind = activity.activity.kind.label(),
            description = %activity.activity.description,
            "Recent activity"
        );
    }

    for project in projects? {
        info!(
            id = %project.project.id,
            name = %project.project.name,
            status = project.project.status.label(),
            commits = project.total_commits,
            "Project"
        );
    }

    Ok(())
}
