//! # DevPulse App
//!
//! Application layer - commands and main entry point.
//!
//! This crate contains:
//! - Commands (the request/response surface the dashboard consumes)
//! - Application context (dependency injection)
//! - Binary entry point and setup
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Commands are plain async functions; the presentation layer that
//!   calls them lives outside this repository

pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::AppContext;
