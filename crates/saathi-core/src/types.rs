// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Saathi workspace.

use serde::{Deserialize, Serialize};

use crate::error::SaathiError;

/// Identifies a user. Wraps the Telegram chat id for private chats.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single conversation message. Immutable once created; owned by the
/// conversation store and bounded by the retention window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Message text as received.
    pub text: String,
}

/// A user's configured daily alarm. At most one per user at any time;
/// setting a new one replaces the prior one atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmSpec {
    pub user_id: UserId,
    /// Hour of day, 0-23, in the scheduler's local timezone.
    pub hour: u32,
    /// Minute of hour, 0-59.
    pub minute: u32,
    /// Reminder text delivered on each fire.
    pub message: String,
}

impl AlarmSpec {
    /// Builds a validated alarm spec. Rejects out-of-range times with
    /// [`SaathiError::InvalidTime`].
    pub fn new(
        user_id: UserId,
        hour: u32,
        minute: u32,
        message: impl Into<String>,
    ) -> Result<Self, SaathiError> {
        if hour > 23 || minute > 59 {
            return Err(SaathiError::InvalidTime { hour, minute });
        }
        Ok(Self {
            user_id,
            hour,
            minute,
            message: message.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alarm_spec_accepts_valid_bounds() {
        assert!(AlarmSpec::new(UserId(1), 0, 0, "go").is_ok());
        assert!(AlarmSpec::new(UserId(1), 23, 59, "go").is_ok());
    }

    #[test]
    fn alarm_spec_rejects_hour_24() {
        let err = AlarmSpec::new(UserId(1), 24, 0, "go").unwrap_err();
        assert!(matches!(
            err,
            SaathiError::InvalidTime { hour: 24, minute: 0 }
        ));
    }

    #[test]
    fn alarm_spec_rejects_minute_60() {
        let err = AlarmSpec::new(UserId(1), 9, 60, "go").unwrap_err();
        assert!(matches!(
            err,
            SaathiError::InvalidTime { hour: 9, minute: 60 }
        ));
    }

    #[test]
    fn user_id_displays_as_plain_number() {
        assert_eq!(UserId(12345).to_string(), "12345");
    }

    #[test]
    fn message_serializes_round_trip() {
        let msg = Message {
            timestamp: 1700000000,
            text: "hello".into(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }
}
