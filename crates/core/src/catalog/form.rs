//! Project form validation
//!
//! Validates raw submitted fields into a `NewProject` draft, or rejects
//! with a field-to-messages map. Validation failures never reach the
//! store.

use devpulse_domain::constants::{MAX_PROJECT_DESCRIPTION_LENGTH, MAX_PROJECT_NAME_LENGTH};
use devpulse_domain::{FieldErrors, NewProject, ProjectStatus};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    // Compile-time-constant pattern; cannot fail at runtime
    Regex::new("^#[0-9a-fA-F]{6}$").expect("hex color pattern is valid")
});

/// Raw project form input, as submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectForm {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: String,
    pub color: String,
}

impl ProjectForm {
    /// Validate into a storable draft
    ///
    /// All fields are checked so the caller receives every message in one
    /// pass. The name is trimmed; a missing description defaults to empty.
    pub fn validate(self) -> Result<NewProject, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.add("name", "Name is required");
        } else if name.chars().count() > MAX_PROJECT_NAME_LENGTH {
            errors.add("name", "Name must be less than 100 characters");
        }

        let description = self.description.unwrap_or_default();
        if description.chars().count() > MAX_PROJECT_DESCRIPTION_LENGTH {
            errors.add("description", "Description must be less than 500 characters");
        }

        let status = ProjectStatus::parse(&self.status);
        if status.is_none() {
            errors.add("status", "Status must be one of: active, paused, completed");
        }

        if !HEX_COLOR.is_match(&self.color) {
            errors.add("color", "Invalid color format");
        }

        match (errors.is_empty(), status) {
            (true, Some(status)) => {
                Ok(NewProject { name, description, status, color: self.color })
            }
            _ => Err(errors),
        }
    }
}
