//! Port interfaces for the entity store
//!
//! These traits define the boundaries between core business logic
//! and the storage implementation. Missing records are expressed as
//! `None`/`false` results, never as errors.

use async_trait::async_trait;
use devpulse_domain::{
    Activity, ActivityFilter, DailyStats, NewProject, Project, ProjectPatch, Result,
};

/// Trait for project storage
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All projects, most recently updated first
    async fn list(&self) -> Result<Vec<Project>>;

    /// Look up a single project
    async fn find_by_id(&self, id: &str) -> Result<Option<Project>>;

    /// Store a new project; the implementation assigns the id and both
    /// timestamps and returns the stored record
    async fn create(&self, draft: NewProject) -> Result<Project>;

    /// Merge the patch into an existing project, touching `updated_at`.
    /// Returns `None` when the id is unknown.
    async fn update(&self, id: &str, patch: ProjectPatch) -> Result<Option<Project>>;

    /// Remove a project, reporting whether it existed
    async fn delete(&self, id: &str) -> Result<bool>;
}

/// Trait for activity storage
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// Activities matching the filter, newest first
    async fn list(&self, filter: ActivityFilter) -> Result<Vec<Activity>>;
}

/// Trait for daily statistics storage
#[async_trait]
pub trait DailyStatsRepository: Send + Sync {
    /// The trailing `days` records, ordered by date ascending
    async fn last_n_days(&self, days: usize) -> Result<Vec<DailyStats>>;

    /// Every stored record, ordered by date ascending
    async fn all(&self) -> Result<Vec<DailyStats>>;
}
