//! In-memory activity repository
//!
//! Activities are append-only seed data in the current model; the port
//! surface is read-only and tolerates dangling project references.

use std::sync::Arc;

use async_trait::async_trait;
use devpulse_core::ActivityRepository as ActivityRepositoryPort;
use devpulse_domain::{Activity, ActivityFilter, Result as DomainResult};

use super::MemoryStore;

/// Activity repository backed by the shared in-memory store
pub struct InMemoryActivityRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryActivityRepository {
    /// Construct a repository over the shared store
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ActivityRepositoryPort for InMemoryActivityRepository {
    async fn list(&self, filter: ActivityFilter) -> DomainResult<Vec<Activity>> {
        self.store.simulate_latency().await;

        let mut activities: Vec<Activity> = self
            .store
            .activities()
            .read()
            .values()
            .filter(|a| filter.project_id.as_deref().map_or(true, |id| a.project_id == id))
            .cloned()
            .collect();

        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        if let Some(limit) = filter.limit {
            activities.truncate(limit);
        }
        Ok(activities)
    }
}
