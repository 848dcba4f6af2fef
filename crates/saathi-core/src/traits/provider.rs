// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AI reply generation.

use async_trait::async_trait;

use crate::types::UserId;

/// Produces a context-aware reply to a user message.
///
/// Implementations absorb backend and transport failures internally and
/// return a user-safe fallback string instead of an error, so the message
/// handling path never fails on gateway trouble.
#[async_trait]
pub trait ReplyProvider: Send + Sync + 'static {
    /// Generates a reply to `text` from `user_id`, using whatever recent
    /// context the implementation keeps.
    async fn generate_reply(&self, user_id: UserId, text: &str) -> String;
}
