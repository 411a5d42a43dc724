//! In-memory daily statistics repository
//!
//! The table is keyed by calendar date, so the one-record-per-date
//! invariant and ascending iteration order both fall out of the BTreeMap.

use std::sync::Arc;

use async_trait::async_trait;
use devpulse_core::DailyStatsRepository as DailyStatsRepositoryPort;
use devpulse_domain::{DailyStats, Result as DomainResult};

use super::MemoryStore;

/// Daily statistics repository backed by the shared in-memory store
pub struct InMemoryDailyStatsRepository {
    store: Arc<MemoryStore>,
}

impl InMemoryDailyStatsRepository {
    /// Construct a repository over the shared store
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DailyStatsRepositoryPort for InMemoryDailyStatsRepository {
    async fn last_n_days(&self, days: usize) -> DomainResult<Vec<DailyStats>> {
        self.store.simulate_latency().await;

        let stats = self.store.daily_stats().read();
        let skip = stats.len().saturating_sub(days);
        Ok(stats.values().skip(skip).cloned().collect())
    }

    async fn all(&self) -> DomainResult<Vec<DailyStats>> {
        self.store.simulate_latency().await;
        Ok(self.store.daily_stats().read().values().cloned().collect())
    }
}
