//! Seed data generator
//!
//! Produces a fixed set of example projects and a randomized but
//! shape-consistent set of activities and daily statistics spanning a
//! trailing window, for demonstration purposes. The RNG is seedable so
//! tests get reproducible fixtures; the demo default draws from entropy.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};
use devpulse_domain::{
    Activity, ActivityKind, DailyStats, Project, ProjectStatus, SeedConfig,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

const COMMIT_DESCRIPTIONS: [&str; 8] = [
    "Implemented user authentication flow",
    "Fixed pagination bug in dashboard",
    "Added unit tests for API endpoints",
    "Refactored database queries for performance",
    "Updated dependencies to latest versions",
    "Added dark mode support",
    "Improved error handling in forms",
    "Optimized image loading",
];

const REVIEW_DESCRIPTIONS: [&str; 4] = [
    "Reviewed PR: Add caching layer",
    "Approved PR: Fix login redirect",
    "Requested changes on PR: Update styles",
    "Reviewed PR: Refactor auth module",
];

const DEPLOY_DESCRIPTIONS: [&str; 4] = [
    "Deployed v2.1.0 to production",
    "Deployed hotfix for login issue",
    "Staged release candidate for testing",
    "Deployed database migrations",
];

const ISSUE_DESCRIPTIONS: [&str; 4] = [
    "Opened issue: Mobile responsiveness",
    "Closed issue: Memory leak in dashboard",
    "Opened issue: Add export feature",
    "Closed issue: Fix date formatting",
];

/// Generated tables ready for `MemoryStore::load`
#[derive(Debug, Clone, Serialize)]
pub struct SeedData {
    pub projects: Vec<Project>,
    pub activities: Vec<Activity>,
    pub daily_stats: Vec<DailyStats>,
}

/// Seed data generator over a seedable RNG
pub struct SeedGenerator {
    rng: StdRng,
    window_days: u32,
    now: DateTime<Utc>,
}

impl SeedGenerator {
    /// Create a generator from configuration. A configured `rng_seed`
    /// makes the output reproducible; otherwise the RNG draws from
    /// entropy.
    pub fn new(config: &SeedConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, window_days: config.window_days, now: Utc::now() }
    }

    /// Create a generator with a fixed seed and the default window
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            window_days: devpulse_domain::constants::DEFAULT_SEED_WINDOW_DAYS,
            now: Utc::now(),
        }
    }

    /// Pin the reference instant the trailing window ends at. Fixture
    /// snapshots need this in addition to a fixed seed.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Generate all three tables
    pub fn generate(mut self) -> SeedData {
        let projects = self.example_projects();
        let activities = self.generate_activities(&projects);
        let daily_stats = self.generate_daily_stats();
        SeedData { projects, activities, daily_stats }
    }

    /// Fixed list of example projects with distinct status, color and age
    fn example_projects(&self) -> Vec<Project> {
        let project = |id: &str,
                       name: &str,
                       description: &str,
                       status: ProjectStatus,
                       color: &str,
                       created_days_ago: i64,
                       updated_days_ago: i64| Project {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            status,
            color: color.to_string(),
            created_at: self.now - Duration::days(created_days_ago),
            updated_at: self.now - Duration::days(updated_days_ago),
        };

        vec![
            project(
                "proj_1",
                "DevPulse",
                "Developer analytics dashboard for tracking productivity metrics",
                ProjectStatus::Active,
                "#3b82f6",
                45,
                1,
            ),
            project(
                "proj_2",
                "API Gateway",
                "Centralized API gateway with rate limiting and auth",
                ProjectStatus::Active,
                "#22c55e",
                90,
                3,
            ),
            project(
                "proj_3",
                "Mobile App",
                "Cross-platform mobile application using React Native",
                ProjectStatus::Paused,
                "#a855f7",
                120,
                14,
            ),
            project(
                "proj_4",
                "Design System",
                "Component library and design tokens for consistency",
                ProjectStatus::Completed,
                "#f97316",
                180,
                30,
            ),
            project(
                "proj_5",
                "E-commerce Platform",
                "Full-featured online store with inventory management",
                ProjectStatus::Active,
                "#ec4899",
                60,
                2,
            ),
        ]
    }

    /// 2-9 activities per trailing day, timestamped during business hours
    fn generate_activities(&mut self, projects: &[Project]) -> Vec<Activity> {
        let mut activities = Vec::new();
        let mut next_id = 1u32;

        for days_ago in 0..i64::from(self.window_days) {
            let date = (self.now - Duration::days(days_ago)).date_naive();
            let per_day = self.rng.gen_range(2..=9);

            for _ in 0..per_day {
                let kind = ActivityKind::ALL[self.rng.gen_range(0..ActivityKind::ALL.len())];
                let project = &projects[self.rng.gen_range(0..projects.len())];
                let pool = description_pool(kind);
                let description = pool[self.rng.gen_range(0..pool.len())];

                let hour = 9 + self.rng.gen_range(0..10i64);
                let minute = self.rng.gen_range(0..60i64);
                let timestamp = (date.and_time(NaiveTime::MIN)
                    + Duration::hours(hour)
                    + Duration::minutes(minute))
                .and_utc();

                activities.push(Activity {
                    id: format!("act_{next_id}"),
                    project_id: project.id.clone(),
                    kind,
                    description: description.to_string(),
                    timestamp,
                    metadata: None,
                });
                next_id += 1;
            }
        }

        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        activities
    }

    /// One record per trailing day, with counts skewed lower on weekends
    fn generate_daily_stats(&mut self) -> Vec<DailyStats> {
        let mut stats = Vec::new();

        for days_ago in (0..i64::from(self.window_days)).rev() {
            let date = (self.now - Duration::days(days_ago)).date_naive();
            let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

            let commits =
                if weekend { self.rng.gen_range(0..=4) } else { self.rng.gen_range(3..=14) };
            let reviews =
                if weekend { self.rng.gen_range(0..=1) } else { self.rng.gen_range(1..=5) };
            let deploys = if self.rng.gen_bool(0.3) { self.rng.gen_range(1..=3) } else { 0 };
            let hours_logged = if weekend {
                self.rng.gen_range(0.0..3.0)
            } else {
                self.rng.gen_range(5.0..9.0)
            };

            stats.push(DailyStats { date, commits, reviews, deploys, hours_logged });
        }

        stats
    }
}

fn description_pool(kind: ActivityKind) -> &'static [&'static str] {
    match kind {
        ActivityKind::Commit => &COMMIT_DESCRIPTIONS,
        ActivityKind::Review => &REVIEW_DESCRIPTIONS,
        ActivityKind::Deploy => &DEPLOY_DESCRIPTIONS,
        ActivityKind::Issue => &ISSUE_DESCRIPTIONS,
    }
}
