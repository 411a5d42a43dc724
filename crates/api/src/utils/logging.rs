//! Structured logging helpers for command execution

use std::time::Duration;

use devpulse_domain::DevPulseError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"projects::list_projects"`).
/// * `elapsed` - Duration the command execution took.
/// * `success` - Whether the command completed successfully.
///
/// The helper keeps the command wrappers concise and the log shape
/// consistent. Callers must avoid forwarding sensitive values in
/// `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, success: bool) {
    let duration_ms = elapsed.as_millis() as u64;

    if success {
        info!(command, duration_ms, "command_execution_success");
    } else {
        warn!(command, duration_ms, "command_execution_failure");
    }
}

/// Convert a `DevPulseError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &DevPulseError) -> &'static str {
    match error {
        DevPulseError::Store(_) => "store",
        DevPulseError::Config(_) => "config",
        DevPulseError::NotFound(_) => "not_found",
        DevPulseError::InvalidInput(_) => "invalid_input",
        DevPulseError::Internal(_) => "internal",
    }
}
