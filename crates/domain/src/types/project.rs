//! Project entity and its derived/input types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Paused,
    Completed,
}

impl ProjectStatus {
    /// Parse a submitted status token. Unknown tokens are `None`; the form
    /// layer turns that into a field error rather than a default.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
        }
    }
}

/// A tracked project
///
/// `id` is immutable after creation; `updated_at` advances on every
/// mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// Display color as `#rrggbb`
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Project enriched with activity-derived stats for list and detail views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectWithStats {
    #[serde(flatten)]
    pub project: Project,
    pub total_commits: u32,
    pub total_hours: f64,
    /// Timestamp of the most recent activity, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
}

/// Validated input for creating a project. The store assigns the id and
/// both timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub color: String,
}

/// Partial update for a project. Absent fields keep their current value;
/// an empty patch still touches `updated_at`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl From<NewProject> for ProjectPatch {
    fn from(draft: NewProject) -> Self {
        Self {
            name: Some(draft.name),
            description: Some(draft.description),
            status: Some(draft.status),
            color: Some(draft.color),
        }
    }
}

/// Field-to-messages map returned by form validation
///
/// Keyed by field name (`"name"`, `"color"`, ...) with `"form"` reserved
/// for submission-level failures that are not tied to a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub const FORM: &'static str = "form";

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a submission-level error in one step
    pub fn form_error(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(Self::FORM, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_tokens_only() {
        assert_eq!(ProjectStatus::parse("active"), Some(ProjectStatus::Active));
        assert_eq!(ProjectStatus::parse("completed"), Some(ProjectStatus::Completed));
        assert_eq!(ProjectStatus::parse("archived"), None);
        assert_eq!(ProjectStatus::parse("Active"), None);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ProjectStatus::Paused).unwrap();
        assert_eq!(json, r#""paused""#);
    }

    #[test]
    fn project_with_stats_flattens_project_fields() {
        let project = Project {
            id: "proj_1".into(),
            name: "DevPulse".into(),
            description: "Dashboard".into(),
            status: ProjectStatus::Active,
            color: "#3b82f6".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let enriched = ProjectWithStats {
            project,
            total_commits: 12,
            total_hours: 18.5,
            last_activity: None,
        };

        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["id"], "proj_1");
        assert_eq!(json["total_commits"], 12);
        assert!(json.get("last_activity").is_none());
    }

    #[test]
    fn field_errors_accumulate_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("name", "Name is required");
        errors.add("name", "Name must be less than 100 characters");
        errors.add("color", "Invalid color format");

        assert!(!errors.is_empty());
        assert_eq!(errors.get("name").map(<[String]>::len), Some(2));
        assert_eq!(errors.get("color").map(<[String]>::len), Some(1));
        assert!(errors.get("status").is_none());
    }
}
