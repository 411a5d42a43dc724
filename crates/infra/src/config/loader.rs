//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Start from built-in defaults
//! 2. Merge the first config file found (TOML)
//! 3. Apply environment variable overrides on top
//!
//! ## Environment Variables
//! - `DEVPULSE_STORE_LATENCY_MS`: Simulated store latency in milliseconds
//! - `DEVPULSE_SEED_ENABLED`: Whether to seed example data (true/false)
//! - `DEVPULSE_SEED_WINDOW_DAYS`: Trailing window of seeded days
//! - `DEVPULSE_SEED_RNG_SEED`: Fixed RNG seed for reproducible data
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` (current working directory)
//! 2. `./devpulse.toml` (current working directory)
//! 3. `../config.toml` (parent directory)
//! 4. `../devpulse.toml` (parent directory)

use std::path::{Path, PathBuf};

use devpulse_domain::{Config, DevPulseError, Result};

const CONFIG_PROBE_PATHS: [&str; 4] =
    ["config.toml", "devpulse.toml", "../config.toml", "../devpulse.toml"];

/// Load configuration with the default fallback strategy
///
/// # Errors
/// Returns `DevPulseError::Config` if a found file fails to parse or an
/// environment override has an invalid value. A missing file is not an
/// error; defaults apply.
pub fn load() -> Result<Config> {
    let mut config = match find_config_file() {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading configuration file");
            load_from_file(&path)?
        }
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    Ok(config)
}

/// Load configuration from a specific TOML file
///
/// # Errors
/// Returns `DevPulseError::Config` if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path).map_err(|err| {
        DevPulseError::Config(format!("failed to read {}: {err}", path.display()))
    })?;

    toml::from_str(&contents).map_err(|err| {
        DevPulseError::Config(format!("failed to parse {}: {err}", path.display()))
    })
}

fn find_config_file() -> Option<PathBuf> {
    CONFIG_PROBE_PATHS.into_iter().map(PathBuf::from).find(|path| path.is_file())
}

/// Apply `DEVPULSE_*` overrides from the given lookup
///
/// Split from `std::env` so tests can drive it without mutating process
/// state.
fn apply_env_overrides(
    config: &mut Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(value) = lookup("DEVPULSE_STORE_LATENCY_MS") {
        config.store.simulated_latency_ms = parse_var("DEVPULSE_STORE_LATENCY_MS", &value)?;
    }
    if let Some(value) = lookup("DEVPULSE_SEED_ENABLED") {
        config.seed.enabled = parse_bool("DEVPULSE_SEED_ENABLED", &value)?;
    }
    if let Some(value) = lookup("DEVPULSE_SEED_WINDOW_DAYS") {
        config.seed.window_days = parse_var("DEVPULSE_SEED_WINDOW_DAYS", &value)?;
    }
    if let Some(value) = lookup("DEVPULSE_SEED_RNG_SEED") {
        config.seed.rng_seed = Some(parse_var("DEVPULSE_SEED_RNG_SEED", &value)?);
    }
    Ok(())
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|err| DevPulseError::Config(format!("invalid {name} value {value:?}: {err}")))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(DevPulseError::Config(format!("invalid {name} value {value:?}"))),
    }
}
