//! # DevPulse Infra
//!
//! Infrastructure layer - adapters behind the core ports.
//!
//! This crate contains:
//! - The in-memory entity store with simulated asynchronous latency
//! - Repository implementations of the core ports
//! - The seed data generator
//! - Configuration loading (environment + TOML files)
//!
//! ## Architecture
//! - Implements the traits defined in `devpulse-core`
//! - The rest of the system never touches the tables directly

pub mod config;
pub mod seed;
pub mod store;

// Re-export the main entry points
pub use config::loader;
pub use seed::{SeedData, SeedGenerator};
pub use store::{
    InMemoryActivityRepository, InMemoryDailyStatsRepository, InMemoryProjectRepository,
    MemoryStore,
};
