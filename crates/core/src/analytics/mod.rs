//! Analytics subsystem: period-bucketed aggregation queries

pub mod service;
pub mod trend;

pub use service::AnalyticsService;
