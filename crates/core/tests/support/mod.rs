//! Shared fixtures for core integration tests

pub mod repositories;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use devpulse_domain::{Activity, ActivityKind, DailyStats, Project, ProjectStatus};

/// Build a project fixture with a distinct updated timestamp
pub fn project(id: &str, name: &str, updated_ts: i64) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        status: ProjectStatus::Active,
        color: "#3b82f6".to_string(),
        created_at: ts(0),
        updated_at: ts(updated_ts),
    }
}

/// Build an activity fixture
pub fn activity(id: &str, project_id: &str, kind: ActivityKind, timestamp: i64) -> Activity {
    Activity {
        id: id.to_string(),
        project_id: project_id.to_string(),
        kind,
        description: "Refactored database queries for performance".to_string(),
        timestamp: ts(timestamp),
        metadata: None,
    }
}

/// Build a daily stats fixture
pub fn stats_day(date: NaiveDate, commits: u32, hours_logged: f64) -> DailyStats {
    DailyStats { date, commits, reviews: 1, deploys: 0, hours_logged }
}

/// Consecutive daily stats starting at `start`, one record per entry in
/// `commits_per_day`, all with the given hours
pub fn stats_window(start: NaiveDate, commits_per_day: &[u32], hours: f64) -> Vec<DailyStats> {
    commits_per_day
        .iter()
        .enumerate()
        .map(|(offset, &commits)| {
            stats_day(start + chrono::Duration::days(offset as i64), commits, hours)
        })
        .collect()
}

pub fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_770_000_000 + secs, 0).unwrap()
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}
