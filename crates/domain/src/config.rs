//! Configuration structures
//!
//! Plain serde structs with defaults; loading lives in the infra crate.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEED_WINDOW_DAYS, DEFAULT_STORE_LATENCY_MS};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Entity store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Artificial delay applied before every store operation, in
    /// milliseconds. Set to 0 in tests.
    #[serde(default = "default_latency_ms")]
    pub simulated_latency_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { simulated_latency_ms: default_latency_ms() }
    }
}

/// Seed data generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether the store is seeded with example data at startup
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,

    /// Trailing window of days covered by generated activities and stats
    #[serde(default = "default_seed_window_days")]
    pub window_days: u32,

    /// Fixed RNG seed. `None` draws one from entropy, which is the
    /// demo-data default; tests pin this for reproducible fixtures.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_seed_enabled(),
            window_days: default_seed_window_days(),
            rng_seed: None,
        }
    }
}

fn default_latency_ms() -> u64 {
    DEFAULT_STORE_LATENCY_MS
}

fn default_seed_enabled() -> bool {
    true
}

fn default_seed_window_days() -> u32 {
    DEFAULT_SEED_WINDOW_DAYS
}
