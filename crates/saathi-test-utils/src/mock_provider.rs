// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock reply provider for deterministic testing.

use async_trait::async_trait;
use tokio::sync::Mutex;

use saathi_core::traits::ReplyProvider;
use saathi_core::types::UserId;

/// A reply provider that returns a canned reply and records every prompt
/// it was asked about.
pub struct CannedReplyProvider {
    reply: String,
    asked: Mutex<Vec<(UserId, String)>>,
}

impl CannedReplyProvider {
    /// Creates a provider that answers every message with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// All (user, text) pairs generate_reply was called with, in order.
    pub async fn asked(&self) -> Vec<(UserId, String)> {
        self.asked.lock().await.clone()
    }
}

#[async_trait]
impl ReplyProvider for CannedReplyProvider {
    async fn generate_reply(&self, user_id: UserId, text: &str) -> String {
        self.asked.lock().await.push((user_id, text.to_string()));
        self.reply.clone()
    }
}
