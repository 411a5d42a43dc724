//! Analytics service - period-bucketed aggregation queries
//!
//! The only nontrivial arithmetic in the system lives here: window
//! splitting, trend deltas, and breakdown shares. None of these raise;
//! unknown periods default to 30 days and divisions by zero resolve to 0.

use std::sync::Arc;

use devpulse_domain::{DailyStats, Period, PeriodSummary, ProjectBreakdown, Result};
use tracing::debug;

use super::trend::{round1, trend};
use crate::catalog::ports::DailyStatsRepository;
use crate::catalog::CatalogService;

/// Analytics service over daily stats and the catalog
pub struct AnalyticsService {
    daily_stats: Arc<dyn DailyStatsRepository>,
    catalog: Arc<CatalogService>,
}

impl AnalyticsService {
    /// Create a new analytics service
    pub fn new(daily_stats: Arc<dyn DailyStatsRepository>, catalog: Arc<CatalogService>) -> Self {
        Self { daily_stats, catalog }
    }

    /// Trailing daily stats for the period, date ascending
    pub async fn daily_stats_for_period(&self, period: Period) -> Result<Vec<DailyStats>> {
        self.daily_stats.last_n_days(period.days()).await
    }

    /// Summary metrics for the period with deltas against the preceding
    /// window of equal length
    pub async fn period_summary(&self, period: Period) -> Result<PeriodSummary> {
        let days = period.days();
        // Double window for the trend comparison
        let stats = self.daily_stats.last_n_days(days * 2).await?;
        debug!(period = period.label(), records = stats.len(), "computing period summary");

        // Current window is the trailing `days` entries; whatever precedes
        // it forms the previous window. The windows never overlap, so a
        // short history just shortens the previous window.
        let split = stats.len().saturating_sub(days);
        let (previous, current) = stats.split_at(split);

        let total_commits: u32 = current.iter().map(|d| d.commits).sum();
        let total_reviews: u32 = current.iter().map(|d| d.reviews).sum();
        let total_deploys: u32 = current.iter().map(|d| d.deploys).sum();
        let total_hours: f64 = current.iter().map(|d| d.hours_logged).sum();

        let prev_commits: u32 = previous.iter().map(|d| d.commits).sum();
        let prev_hours: f64 = previous.iter().map(|d| d.hours_logged).sum();

        Ok(PeriodSummary {
            total_commits,
            total_reviews,
            total_deploys,
            total_hours: total_hours.round(),
            avg_commits_per_day: (f64::from(total_commits) / days as f64).round() as u32,
            avg_hours_per_day: round1(total_hours / days as f64),
            most_active_day: most_active_day(current),
            commits_trend: trend(f64::from(total_commits), f64::from(prev_commits)),
            hours_trend: trend(total_hours, prev_hours),
        })
    }

    /// Per-project share of total commits, sorted by commit count
    /// descending
    pub async fn project_breakdown(&self) -> Result<Vec<ProjectBreakdown>> {
        let projects = self.catalog.projects_with_stats().await?;
        let total_commits: u32 = projects.iter().map(|p| p.total_commits).sum();

        let mut breakdown: Vec<ProjectBreakdown> = projects
            .into_iter()
            .map(|p| ProjectBreakdown {
                share: if total_commits > 0 {
                    f64::from(p.total_commits) / f64::from(total_commits)
                } else {
                    0.0
                },
                project_id: p.project.id,
                project_name: p.project.name,
                project_color: p.project.color,
                commits: p.total_commits,
                hours: p.total_hours,
            })
            .collect();

        // Stable sort keeps the updated-desc listing order among equals
        breakdown.sort_by(|a, b| b.commits.cmp(&a.commits));
        Ok(breakdown)
    }
}

/// Date with the highest commit count; first occurrence wins ties
fn most_active_day(window: &[DailyStats]) -> Option<chrono::NaiveDate> {
    let mut best: Option<&DailyStats> = None;
    for day in window {
        match best {
            Some(current) if day.commits <= current.commits => {}
            _ => best = Some(day),
        }
    }
    best.map(|d| d.date)
}
