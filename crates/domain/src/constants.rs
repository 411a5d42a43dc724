//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

/// Application display name
pub const APP_NAME: &str = "DevPulse";
/// Application tagline shown at startup
pub const APP_DESCRIPTION: &str = "Developer Analytics Dashboard";

// Store configuration defaults
pub const DEFAULT_STORE_LATENCY_MS: u64 = 300;
pub const DEFAULT_SEED_WINDOW_DAYS: u32 = 30;

// Project form validation bounds
pub const MAX_PROJECT_NAME_LENGTH: usize = 100;
pub const MAX_PROJECT_DESCRIPTION_LENGTH: usize = 500;

// Activity feed defaults
pub const DEFAULT_ACTIVITY_LIMIT: usize = 50;
pub const RECENT_ACTIVITY_WINDOW_DAYS: i64 = 7;

// Fallbacks for activities whose project no longer exists
pub const UNKNOWN_PROJECT_NAME: &str = "Unknown";
pub const UNKNOWN_PROJECT_COLOR: &str = "#9ca3af";

/// Project color options offered by the form layer
pub const PROJECT_COLORS: [(&str, &str); 6] = [
    ("Blue", "#3b82f6"),
    ("Green", "#22c55e"),
    ("Purple", "#a855f7"),
    ("Orange", "#f97316"),
    ("Pink", "#ec4899"),
    ("Cyan", "#06b6d4"),
];
