//! Application context - dependency injection container

use std::sync::Arc;

use devpulse_core::{AnalyticsService, CatalogService, DailyStatsRepository};
use devpulse_domain::Config;
use devpulse_infra::{
    InMemoryActivityRepository, InMemoryDailyStatsRepository, InMemoryProjectRepository,
    MemoryStore, SeedGenerator,
};
use tracing::info;

/// Application context - holds all services and dependencies
///
/// Construct one per process (or per test) and pass it by reference to
/// every command. Multiple isolated contexts can coexist; nothing here is
/// ambient global state.
pub struct AppContext {
    pub config: Config,
    pub store: Arc<MemoryStore>,
    pub catalog: Arc<CatalogService>,
    pub analytics: Arc<AnalyticsService>,
}

impl AppContext {
    /// Build the store, optionally seed it, and wire all services
    pub fn new(config: Config) -> Self {
        let store = Arc::new(MemoryStore::new(&config.store));

        if config.seed.enabled {
            let data = SeedGenerator::new(&config.seed).generate();
            info!(
                projects = data.projects.len(),
                activities = data.activities.len(),
                daily_stats = data.daily_stats.len(),
                "Seeding entity store"
            );
            store.load(data);
        }

        let daily_stats: Arc<dyn DailyStatsRepository> =
            Arc::new(InMemoryDailyStatsRepository::new(Arc::clone(&store)));

        let catalog = Arc::new(CatalogService::new(
            Arc::new(InMemoryProjectRepository::new(Arc::clone(&store))),
            Arc::new(InMemoryActivityRepository::new(Arc::clone(&store))),
            Arc::clone(&daily_stats),
        ));

        let analytics = Arc::new(AnalyticsService::new(daily_stats, Arc::clone(&catalog)));

        Self { config, store, catalog, analytics }
    }
}
