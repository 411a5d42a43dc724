//! Daily statistics and derived analytics views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Per-day activity counters
///
/// At most one record exists per calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStats {
    pub date: NaiveDate,
    pub commits: u32,
    pub reviews: u32,
    pub deploys: u32,
    pub hours_logged: f64,
}

/// Analytics period token carried in the dashboard URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "14d")]
    FourteenDays,
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
}

impl Period {
    /// Resolve a query token leniently: unrecognized tokens fall back to
    /// the 30-day default rather than erroring.
    pub fn parse(token: &str) -> Self {
        match token {
            "7d" => Self::SevenDays,
            "14d" => Self::FourteenDays,
            "90d" => Self::NinetyDays,
            _ => Self::ThirtyDays,
        }
    }

    /// Number of days covered by this period
    pub fn days(&self) -> usize {
        match self {
            Self::SevenDays => 7,
            Self::FourteenDays => 14,
            Self::ThirtyDays => 30,
            Self::NinetyDays => 90,
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::SevenDays => "Last 7 days",
            Self::FourteenDays => "Last 14 days",
            Self::ThirtyDays => "Last 30 days",
            Self::NinetyDays => "Last 90 days",
        }
    }
}

/// Aggregate metrics for a period, with deltas against the preceding
/// window of equal length
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub total_commits: u32,
    pub total_reviews: u32,
    pub total_deploys: u32,
    /// Hours in the current window, rounded to a whole number
    pub total_hours: f64,
    pub avg_commits_per_day: u32,
    /// Rounded to one decimal
    pub avg_hours_per_day: f64,
    /// Date with the highest commit count in the current window; first
    /// occurrence wins ties, absent when the window is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_active_day: Option<NaiveDate>,
    /// Fractional change vs the previous window (0.0 when the previous
    /// window total is 0)
    pub commits_trend: f64,
    pub hours_trend: f64,
}

/// One project's share of commit activity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectBreakdown {
    pub project_id: String,
    pub project_name: String,
    pub project_color: String,
    pub commits: u32,
    pub hours: f64,
    /// Fraction of all commits in [0, 1]; 0 for every entry when no
    /// commits exist
    pub share: f64,
}

/// Dashboard overview snapshot, recomputed from the full tables per call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_projects: u32,
    pub active_projects: u32,
    pub total_commits: u32,
    /// Rounded sum of all daily hours
    pub total_hours: f64,
    /// Activities recorded in the trailing 7 days
    pub recent_activities: u32,
}
