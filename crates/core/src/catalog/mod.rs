//! Catalog subsystem: entity reads, enrichment, and mutations

pub mod form;
pub mod ports;
pub mod service;

pub use service::CatalogService;
