//! Shared context setup for command integration tests

use std::sync::Arc;

use devpulse_domain::{Config, SeedConfig, StoreConfig};
use devpulse_lib::AppContext;

/// Context with zero latency and reproducible seed data
pub fn test_context() -> Arc<AppContext> {
    Arc::new(AppContext::new(Config {
        store: StoreConfig { simulated_latency_ms: 0 },
        seed: SeedConfig { enabled: true, window_days: 30, rng_seed: Some(1234) },
    }))
}

/// Context with zero latency and an empty store
#[allow(dead_code)]
pub fn empty_context() -> Arc<AppContext> {
    Arc::new(AppContext::new(Config {
        store: StoreConfig { simulated_latency_ms: 0 },
        seed: SeedConfig { enabled: false, window_days: 30, rng_seed: None },
    }))
}
