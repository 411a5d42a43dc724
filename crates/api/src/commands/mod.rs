//! Command layer - the request/response surface of the dashboard

pub mod activity;
pub mod analytics;
pub mod projects;

pub use activity::{project_activity, recent_activity};
pub use analytics::{daily_stats, overview_stats, period_summary, project_breakdown};
pub use projects::{
    create_project, delete_project, get_project, list_projects, update_project,
    ProjectFormState,
};
