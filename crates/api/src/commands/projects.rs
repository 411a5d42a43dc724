//! Project management commands
//!
//! Reads return domain `Result`s; form-driven mutations never raise and
//! instead report a `ProjectFormState`, so validation failures and store
//! errors both come back as renderable field/form messages.

use std::sync::Arc;
use std::time::Instant;

use devpulse_core::ProjectForm;
use devpulse_domain::{FieldErrors, Project, ProjectWithStats, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::context::AppContext;
use crate::utils::logging::{error_label, log_command_execution};

const CREATE_FAILED_MESSAGE: &str = "Failed to create project. Please try again.";
const UPDATE_FAILED_MESSAGE: &str = "Failed to update project. Please try again.";
const NOT_FOUND_MESSAGE: &str = "Project not found.";

/// Outcome of a form-driven project mutation
#[derive(Debug, Clone, Serialize)]
pub struct ProjectFormState {
    pub success: bool,
    /// The stored record on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    /// Field-to-messages map on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ProjectFormState {
    fn succeeded(project: Project) -> Self {
        Self { success: true, project: Some(project), errors: None }
    }

    fn rejected(errors: FieldErrors) -> Self {
        Self { success: false, project: None, errors: Some(errors) }
    }

    fn failed(message: &str) -> Self {
        Self::rejected(FieldErrors::form_error(message))
    }
}

/// Get all projects enriched with stats, most recently updated first
pub async fn list_projects(ctx: &Arc<AppContext>) -> Result<Vec<ProjectWithStats>> {
    let start = Instant::now();
    let result = ctx.catalog.projects_with_stats().await;
    log_command_execution("projects::list_projects", start.elapsed(), result.is_ok());
    result
}

/// Get a single project enriched with stats
pub async fn get_project(ctx: &Arc<AppContext>, id: &str) -> Result<Option<ProjectWithStats>> {
    let start = Instant::now();
    let result = ctx.catalog.project_with_stats(id).await;
    log_command_execution("projects::get_project", start.elapsed(), result.is_ok());
    result
}

/// Validate and create a project from submitted form fields
pub async fn create_project(ctx: &Arc<AppContext>, form: ProjectForm) -> ProjectFormState {
    let start = Instant::now();

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            log_command_execution("projects::create_project", start.elapsed(), false);
            return ProjectFormState::rejected(errors);
        }
    };

    let state = match ctx.catalog.create_project(draft).await {
        Ok(project) => {
            info!(project_id = %project.id, "Project created");
            ProjectFormState::succeeded(project)
        }
        Err(err) => {
            warn!(error = %err, error_type = error_label(&err), "Project creation failed");
            ProjectFormState::failed(CREATE_FAILED_MESSAGE)
        }
    };

    log_command_execution("projects::create_project", start.elapsed(), state.success);
    state
}

/// Validate and apply a full-form update to an existing project
pub async fn update_project(
    ctx: &Arc<AppContext>,
    id: &str,
    form: ProjectForm,
) -> ProjectFormState {
    let start = Instant::now();

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(errors) => {
            log_command_execution("projects::update_project", start.elapsed(), false);
            return ProjectFormState::rejected(errors);
        }
    };

    let state = match ctx.catalog.update_project(id, draft.into()).await {
        Ok(Some(project)) => {
            info!(project_id = %project.id, "Project updated");
            ProjectFormState::succeeded(project)
        }
        Ok(None) => ProjectFormState::failed(NOT_FOUND_MESSAGE),
        Err(err) => {
            warn!(
                error = %err,
                error_type = error_label(&err),
                project_id = id,
                "Project update failed"
            );
            ProjectFormState::failed(UPDATE_FAILED_MESSAGE)
        }
    };

    log_command_execution("projects::update_project", start.elapsed(), state.success);
    state
}

/// Delete a project, reporting whether it existed
pub async fn delete_project(ctx: &Arc<AppContext>, id: &str) -> Result<bool> {
    let start = Instant::now();
    let result = ctx.catalog.delete_project(id).await;

    if let Ok(existed) = &result {
        info!(project_id = id, existed, "Project delete handled");
    }
    log_command_execution("projects::delete_project", start.elapsed(), result.is_ok());
    result
}
