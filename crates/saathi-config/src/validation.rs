// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as positive durations and known log levels.

use crate::diagnostic::ConfigError;
use crate::model::SaathiConfig;

const KNOWN_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SaathiConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !KNOWN_LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` is not one of: {}",
                config.agent.log_level,
                KNOWN_LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.memory.retention_secs <= 0 {
        errors.push(ConfigError::Validation {
            message: format!(
                "memory.retention_secs must be positive, got {}",
                config.memory.retention_secs
            ),
        });
    }

    if config.memory.sweep_interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "memory.sweep_interval_secs must be positive".to_string(),
        });
    }

    if config.memory.recent_limit == 0 {
        errors.push(ConfigError::Validation {
            message: "memory.recent_limit must be positive".to_string(),
        });
    }

    if config.gemini.request_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "gemini.request_timeout_secs must be positive".to_string(),
        });
    }

    if config.health.host.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "health.host must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
