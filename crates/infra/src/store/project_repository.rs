//! In-memory project repository
//!
//! Implements the async `ProjectRepository` port over the shared
//! `MemoryStore` tables. Creation assigns identifiers and timestamps so
//! callers never see a half-initialized record.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use devpulse_core::ProjectRepository as ProjectRepositoryPort;
use devpulse_domain::{NewProject, Project, ProjectPatch, Result as DomainResult};
use uuid::Uuid;

use super::MemoryStore;

/// Project repository backed by the shared in-memory store
pub struct InMemoryProjectRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryProjectRepository {
    /// Construct a repository over the shared store
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectRepositoryPort for InMemoryProjectRepository {
    async fn list(&self) -> DomainResult<Vec<Project>> {
        self.store.simulate_latency().await;

        let mut projects: Vec<Project> =
            self.store.projects().read().values().cloned().collect();
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(projects)
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Project>> {
        self.store.simulate_latency().await;
        Ok(self.store.projects().read().get(id).cloned())
    }

    async fn create(&self, draft: NewProject) -> DomainResult<Project> {
        self.store.simulate_latency().await;

        let now = Utc::now();
        let project = Project {
            id: format!("proj_{}", Uuid::now_v7().simple()),
            name: draft.name,
            description: draft.description,
            status: draft.status,
            color: draft.color,
            created_at: now,
            updated_at: now,
        };

        self.store.projects().write().insert(project.id.clone(), project.clone());
        Ok(project)
    }

    async fn update(&self, id: &str, patch: ProjectPatch) -> DomainResult<Option<Project>> {
        self.store.simulate_latency().await;

        let mut projects = self.store.projects().write();
        let Some(existing) = projects.get_mut(id) else {
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
        self.store.simulate_latency().await;
        Ok(self.store.projects().write().remove(id).is_some())
    }
}
