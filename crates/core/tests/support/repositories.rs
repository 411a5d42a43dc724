//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the entity store ports, enabling
//! deterministic service tests without the infra crate.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use devpulse_core::{ActivityRepository, DailyStatsRepository, ProjectRepository};
use devpulse_domain::{
    Activity, ActivityFilter, DailyStats, NewProject, Project, ProjectPatch,
    Result as DomainResult,
};

/// In-memory mock for `ProjectRepository`
#[derive(Default)]
pub struct MockProjectRepository {
    projects: Mutex<Vec<Project>>,
}

impl MockProjectRepository {
    /// Create a new mock seeded with the provided projects
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects: Mutex::new(projects) }
    }
}

#[async_trait]
impl ProjectRepository for MockProjectRepository {
    async fn list(&self) -> DomainResult<Vec<Project>> {
        let mut projects = self.projects.lock().unwrap().clone();
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(projects)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Project>> {
        Ok(self.projects.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, draft: NewProject) -> DomainResult<Project> {
        let mut projects = self.projects.lock().unwrap();
        let now = Utc::now();
        let project = Project {
            id: format!("proj_mock_{}", projects.len() + 1),
            name: draft.name,
            description: draft.description,
            status: draft.status,
            color: draft.color,
            created_at: now,
            updated_at: now,
        };
        projects.push(project.clone());
        Ok(project)
    }

    async fn update(&self, id: &str, patch: ProjectPatch) -> DomainResult<Option<Project>> {
        let mut projects = self.projects.lock().unwrap();
        let Some(existing) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        if let Some(name) = patch.name {
            existing.name = name;
        }
        if let Some(description) = patch.description {
            existing.description = description;
        }
        if let Some(status) = patch.status {
            existing.status = status;
        }
        if let Some(color) = patch.color {
            existing.color = color;
        }
        existing.updated_at = Utc::now();
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        let mut projects = self.projects.lock().unwrap();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }
}

/// In-memory mock for `ActivityRepository`
#[derive(Default)]
pub struct MockActivityRepository {
    activities: Vec<Activity>,
}

impl MockActivityRepository {
    /// Create a new mock seeded with the provided activities
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }
}

#[async_trait]
impl ActivityRepository for MockActivityRepository {
    async fn list(&self, filter: ActivityFilter) -> DomainResult<Vec<Activity>> {
        let mut activities: Vec<Activity> = self
            .activities
            .iter()
            .filter(|a| {
                filter.project_id.as_deref().map_or(true, |id| a.project_id == id)
            })
            .cloned()
            .collect();
        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(limit) = filter.limit {
            activities.truncate(limit);
        }
        Ok(activities)
    }
}

/// In-memory mock for `DailyStatsRepository`
///
/// Records are kept date-ascending, matching the real store contract.
#[derive(Default)]
pub struct MockDailyStatsRepository {
    stats: Vec<DailyStats>,
}

impl MockDailyStatsRepository {
    /// Create a new mock seeded with date-ascending records
    pub fn new(mut stats: Vec<DailyStats>) -> Self {
        stats.sort_by_key(|s| s.date);
        Self { stats }
    }
}

#[async_trait]
impl DailyStatsRepository for MockDailyStatsRepository {
    async fn last_n_days(&self, days: usize) -> DomainResult<Vec<DailyStats>> {
        let start = self.stats.len().saturating_sub(days);
        Ok(self.stats[start..].to_vec())
    }

    async fn all(&self) -> DomainResult<Vec<DailyStats>> {
        Ok(self.stats.clone())
    }
}
