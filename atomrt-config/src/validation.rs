//! Custom validation functions for configuration.
//!
//! Shared validation logic used across the configuration modules.

use validator::ValidationError;

/// Validate a log level directive.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid = ["trace", "debug", "info", "warn", "error", "off"]
        .contains(&level.to_lowercase().as_str());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}
