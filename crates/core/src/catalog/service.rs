//! Catalog service - entity reads, enrichment, and mutations

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use devpulse_domain::constants::{
    RECENT_ACTIVITY_WINDOW_DAYS, UNKNOWN_PROJECT_COLOR, UNKNOWN_PROJECT_NAME,
};
use devpulse_domain::{
    Activity, ActivityFilter, ActivityKind, ActivityWithProject, NewProject, OverviewStats,
    Project, ProjectPatch, ProjectStatus, ProjectWithStats, Result,
};

use super::ports::{ActivityRepository, DailyStatsRepository, ProjectRepository};

/// Catalog service over the entity store ports
///
/// Owns every read path the dashboard consumes directly: project listings
/// (plain and stat-enriched), the activity feed, and the overview
/// snapshot. Mutations pass straight through to the project port.
pub struct CatalogService {
    projects: Arc<dyn ProjectRepository>,
    activities: Arc<dyn ActivityRepository>,
    daily_stats: Arc<dyn DailyStatsRepository>,
}

impl CatalogService {
    /// Create a new catalog service
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        activities: Arc<dyn ActivityRepository>,
        daily_stats: Arc<dyn DailyStatsRepository>,
    ) -> Self {
        Self { projects, activities, daily_stats }
    }

    /// All projects, most recently updated first
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.projects.list().await
    }

    /// All projects enriched with activity-derived stats, most recently
    /// updated first
    pub async fn projects_with_stats(&self) -> Result<Vec<ProjectWithStats>> {
        let projects = self.projects.list().await?;
        let activities = self.activities.list(ActivityFilter::default()).await?;

        Ok(projects.into_iter().map(|project| enrich(project, &activities)).collect())
    }

    /// Look up a single project
    pub async fn project(&self, id: &str) -> Result<Option<Project>> {
        self.projects.find_by_id(id).await
    }

    /// Look up a single project with activity-derived stats
    pub async fn project_with_stats(&self, id: &str) -> Result<Option<ProjectWithStats>> {
        let Some(project) = self.projects.find_by_id(id).await? else {
            return Ok(None);
        };

        let activities = self.activities.list(ActivityFilter::for_project(id)).await?;
        Ok(Some(enrich(project, &activities)))
    }

    /// Store a validated project draft
    pub async fn create_project(&self, draft: NewProject) -> Result<Project> {
        self.projects.create(draft).await
    }

    /// Merge a patch into an existing project. `None` when the id is
    /// unknown; nothing is stored in that case.
    pub async fn update_project(&self, id: &str, patch: ProjectPatch) -> Result<Option<Project>> {
        self.projects.update(id, patch).await
    }

    /// Delete a project, reporting whether it existed. Its activities are
    /// kept and render with the unknown-project fallback.
    pub async fn delete_project(&self, id: &str) -> Result<bool> {
        self.projects.delete(id).await
    }

    /// The `limit` most recent activities across all projects
    pub async fn recent_activity(&self, limit: usize) -> Result<Vec<Activity>> {
        self.activities.list(ActivityFilter::recent(limit)).await
    }

    /// The `limit` most recent activities, enriched with project display
    /// fields. Dangling project references render as "Unknown".
    pub async fn recent_activity_with_project(
        &self,
        limit: usize,
    ) -> Result<Vec<ActivityWithProject>> {
        let activities = self.activities.list(ActivityFilter::recent(limit)).await?;
        let projects = self.projects.list().await?;
        let by_id: HashMap<&str, &Project> =
            projects.iter().map(|p| (p.id.as_str(), p)).collect();

        Ok(activities
            .into_iter()
            .map(|activity| {
                let project = by_id.get(activity.project_id.as_str());
                ActivityWithProject {
                    project_name: project
                        .map_or_else(|| UNKNOWN_PROJECT_NAME.to_string(), |p| p.name.clone()),
                    project_color: project
                        .map_or_else(|| UNKNOWN_PROJECT_COLOR.to_string(), |p| p.color.clone()),
                    activity,
                }
            })
            .collect())
    }

    /// All activities for one project, newest first
    pub async fn project_activity(&self, project_id: &str) -> Result<Vec<Activity>> {
        self.activities.list(ActivityFilter::for_project(project_id)).await
    }

    /// Overview snapshot, recomputed from the full tables on every call
    pub async fn overview(&self) -> Result<OverviewStats> {
        let projects = self.projects.list().await?;
        let activities = self.activities.list(ActivityFilter::default()).await?;
        let stats = self.daily_stats.all().await?;

        let cutoff = Utc::now() - Duration::days(RECENT_ACTIVITY_WINDOW_DAYS);
        let hours: f64 = stats.iter().map(|s| s.hours_logged).sum();

        Ok(OverviewStats {
            total_projects: projects.len() as u32,
            active_projects: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Active)
                .count() as u32,
            total_commits: activities
                .iter()
                .filter(|a| a.kind == ActivityKind::Commit)
                .count() as u32,
            total_hours: hours.round(),
            recent_activities: activities.iter().filter(|a| a.timestamp >= cutoff).count() as u32,
        })
    }
}

/// Attach activity-derived stats to a project
///
/// `activities` may span all projects; only those owned by the project
/// contribute. Total hours come from the per-kind placeholder weights.
fn enrich(project: Project, activities: &[Activity]) -> ProjectWithStats {
    let owned: Vec<&Activity> =
        activities.iter().filter(|a| a.project_id == project.id).collect();

    let total_commits = owned.iter().filter(|a| a.kind == ActivityKind::Commit).count() as u32;
    let total_hours: f64 = owned.iter().map(|a| a.kind.hour_weight()).sum();
    let last_activity = owned.iter().map(|a| a.timestamp).max();

    ProjectWithStats { project, total_commits, total_hours, last_activity }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use devpulse_domain::Activity;

    use super::*;

    fn sample_project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            name: "DevPulse".into(),
            description: "Developer analytics dashboard".into(),
            status: ProjectStatus::Active,
            color: "#3b82f6".into(),
            created_at: Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
        }
    }

    fn sample_activity(id: &str, project_id: &str, kind: ActivityKind, ts: i64) -> Activity {
        Activity {
            id: id.to_string(),
            project_id: project_id.to_string(),
            kind,
            description: "Fixed pagination bug in dashboard".into(),
            timestamp: Utc.timestamp_opt(ts, 0).unwrap(),
            metadata: None,
        }
    }

    #[test]
    fn enrich_counts_only_owned_commits() {
        let activities = vec![
            sample_activity("act_1", "proj_1", ActivityKind::Commit, 1_000),
            sample_activity("act_2", "proj_1", ActivityKind::Review, 2_000),
            sample_activity("act_3", "proj_2", ActivityKind::Commit, 3_000),
        ];

        let enriched = enrich(sample_project("proj_1"), &activities);

        assert_eq!(enriched.total_commits, 1);
        assert_eq!(enriched.total_hours, 1.5 + 0.75);
        assert_eq!(enriched.last_activity, Some(Utc.timestamp_opt(2_000, 0).unwrap()));
    }

    #[test]
    fn enrich_without_activities_has_no_last_activity() {
        let enriched = enrich(sample_project("proj_1"), &[]);

        assert_eq!(enriched.total_commits, 0);
        assert_eq!(enriched.total_hours, 0.0);
        assert!(enriched.last_activity.is_none());
    }
}
