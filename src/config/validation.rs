//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (delays bounded, known log levels)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HarnessConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::HarnessConfig;

/// Largest accepted delay or jitter, in milliseconds.
pub const MAX_DELAY_MS: u64 = 10_000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),

    #[error("nested_indent must contain only whitespace, got {0:?}")]
    IndentNotWhitespace(String),

    #[error("{field} = {value} exceeds maximum {max}")]
    DelayTooLarge {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

/// Check a parsed configuration, collecting every problem.
pub fn validate_config(config: &HarnessConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    let indent = &config.display.nested_indent;
    if !indent.chars().all(char::is_whitespace) {
        errors.push(ValidationError::IndentNotWhitespace(indent.clone()));
    }

    for (field, value) in [
        ("settle_delay_ms", config.timing.settle_delay_ms),
        ("jitter_ms", config.timing.jitter_ms),
    ] {
        if value > MAX_DELAY_MS {
            errors.push(ValidationError::DelayTooLarge {
                field,
                value,
                max: MAX_DELAY_MS,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
