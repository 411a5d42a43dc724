//! Activity entity and read-path enrichments
//!
//! Activities are immutable once created; there is no update operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of recorded developer activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Commit,
    Review,
    Deploy,
    Issue,
}

impl ActivityKind {
    pub const ALL: [Self; 4] = [Self::Commit, Self::Review, Self::Deploy, Self::Issue];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Commit => "Commit",
            Self::Review => "Review",
            Self::Deploy => "Deploy",
            Self::Issue => "Issue",
        }
    }

    /// Hours attributed to one activity of this kind when estimating a
    /// project's total hours. A stand-in derived from activity mix; a real
    /// time-tracking source would supersede it.
    pub fn hour_weight(&self) -> f64 {
        match self {
            Self::Commit => 1.5,
            Self::Review => 0.75,
            Self::Deploy => 0.5,
            Self::Issue => 0.25,
        }
    }
}

/// A single recorded activity
///
/// `project_id` may reference a project that was since deleted; read paths
/// tolerate the dangling reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub project_id: String,
    pub kind: ActivityKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    /// Free-form metadata attached at creation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// Activity enriched with project display fields for the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityWithProject {
    #[serde(flatten)]
    pub activity: Activity,
    pub project_name: String,
    pub project_color: String,
}

/// Filter for activity listings
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    /// Restrict to a single project
    pub project_id: Option<String>,
    /// Cap the number of returned records (newest first)
    pub limit: Option<usize>,
}

impl ActivityFilter {
    /// All activities for one project, newest first
    pub fn for_project(project_id: impl Into<String>) -> Self {
        Self { project_id: Some(project_id.into()), limit: None }
    }

    /// The `limit` most recent activities across all projects
    pub fn recent(limit: usize) -> Self {
        Self { project_id: None, limit: Some(limit) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ActivityKind::Deploy).unwrap(), r#""deploy""#);
        let kind: ActivityKind = serde_json::from_str(r#""issue""#).unwrap();
        assert_eq!(kind, ActivityKind::Issue);
    }

    #[test]
    fn metadata_is_omitted_when_absent() {
        let activity = Activity {
            id: "act_1".into(),
            project_id: "proj_1".into(),
            kind: ActivityKind::Commit,
            description: "Implemented user authentication flow".into(),
            timestamp: Utc::now(),
            metadata: None,
        };

        let json = serde_json::to_value(&activity).unwrap();
        assert!(json.get("metadata").is_none());
        assert_eq!(json["kind"], "commit");
    }

    #[test]
    fn enriched_activity_flattens_base_fields() {
        let enriched = ActivityWithProject {
            activity: Activity {
                id: "act_2".into(),
                project_id: "proj_9".into(),
                kind: ActivityKind::Review,
                description: "Reviewed PR: Add caching layer".into(),
                timestamp: Utc::now(),
                metadata: Some(serde_json::json!({"pr": 42})),
            },
            project_name: "Unknown".into(),
            project_color: "#9ca3af".into(),
        };

        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["id"], "act_2");
        assert_eq!(json["project_name"], "Unknown");
        assert_eq!(json["metadata"]["pr"], 42);
    }
}
