// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Saathi bot.

use thiserror::Error;

/// The primary error type used across Saathi components.
#[derive(Debug, Error)]
pub enum SaathiError {
    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed or out-of-range alarm time. Surfaced to the invoking
    /// command and never retried.
    #[error("invalid alarm time {hour:02}:{minute:02} (hour must be 00-23, minute 00-59)")]
    InvalidTime { hour: u32, minute: u32 },

    /// A delivery callback failed at the transport level. Logged and
    /// swallowed by the alarm fire path; the job stays scheduled.
    #[error("delivery to user {user_id} failed: {message}")]
    Delivery {
        user_id: i64,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// AI backend errors (API failure, malformed response, timeout).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Channel transport errors (connection failure, message format).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
