//! In-memory entity store with simulated asynchronous latency
//!
//! The store stands in for a remote database: every repository operation
//! suspends for a configured artificial delay before touching a table, so
//! callers are shaped for real persistence without being coupled to one.
//! Table guards are `parking_lot` locks acquired strictly after the delay;
//! no guard is ever held across an await point.

pub mod activity_repository;
pub mod daily_stats_repository;
pub mod project_repository;

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use chrono::NaiveDate;
use devpulse_domain::{Activity, DailyStats, Project, StoreConfig};
use parking_lot::RwLock;

use crate::seed::SeedData;

pub use activity_repository::InMemoryActivityRepository;
pub use daily_stats_repository::InMemoryDailyStatsRepository;
pub use project_repository::InMemoryProjectRepository;

/// Shared in-memory tables for all repositories
pub struct MemoryStore {
    latency: Duration,
    projects: RwLock<HashMap<String, Project>>,
    activities: RwLock<HashMap<String, Activity>>,
    daily_stats: RwLock<BTreeMap<NaiveDate, DailyStats>>,
}

impl MemoryStore {
    /// Create an empty store from configuration
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_latency(Duration::from_millis(config.simulated_latency_ms))
    }

    /// Create an empty store with an explicit simulated latency
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            projects: RwLock::new(HashMap::new()),
            activities: RwLock::new(HashMap::new()),
            daily_stats: RwLock::new(BTreeMap::new()),
        }
    }

    /// Bulk-load seed data into the tables, replacing existing contents
    pub fn load(&self, data: SeedData) {
        let mut projects = self.projects.write();
        projects.clear();
        projects.extend(data.projects.into_iter().map(|p| (p.id.clone(), p)));
        drop(projects);

        let mut activities = self.activities.write();
        activities.clear();
        activities.extend(data.activities.into_iter().map(|a| (a.id.clone(), a)));
        drop(activities);

        let mut daily_stats = self.daily_stats.write();
        daily_stats.clear();
        daily_stats.extend(data.daily_stats.into_iter().map(|s| (s.date, s)));
    }

    /// Suspend for the configured artificial latency
    pub(crate) async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub(crate) fn projects(&self) -> &RwLock<HashMap<String, Project>> {
        &self.projects
    }

    pub(crate) fn activities(&self) -> &RwLock<HashMap<String, Activity>> {
        &self.activities
    }

    pub(crate) fn daily_stats(&self) -> &RwLock<BTreeMap<NaiveDate, DailyStats>> {
        &self.daily_stats
    }
}
