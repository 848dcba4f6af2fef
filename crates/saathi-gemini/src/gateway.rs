// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context-aware reply generation backed by the Gemini API.
//!
//! [`GeminiGateway`] reads a user's recent conversation window, builds a
//! prompt from it, and calls the backend with a bounded timeout. Any
//! transport failure, bad response, or timeout resolves to a fixed
//! user-safe fallback string instead of an error.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use saathi_core::traits::ReplyProvider;
use saathi_core::types::{Message, UserId};
use saathi_memory::ConversationStore;

use crate::client::GeminiClient;
use crate::types::{self, Content, GenerateContentRequest, GenerationConfig, Part};

/// Reply sent when the backend cannot produce an answer.
pub const FALLBACK_REPLY: &str = "Maaf — AI se jawab nahi aa paaya. Thoda der baad try karein.";

/// Reply provider that prompts Gemini with recent conversation context.
pub struct GeminiGateway {
    client: GeminiClient,
    store: Arc<ConversationStore>,
    recent_limit: usize,
    max_output_tokens: u32,
    request_timeout: Duration,
}

impl GeminiGateway {
    pub fn new(
        client: GeminiClient,
        store: Arc<ConversationStore>,
        recent_limit: usize,
        max_output_tokens: u32,
        request_timeout: Duration,
    ) -> Self {
        Self {
            client,
            store,
            recent_limit,
            max_output_tokens,
            request_timeout,
        }
    }
}

/// Builds the prompt: one "User:" line per recent message, then the
/// current message.
fn build_prompt(history: &[Message], text: &str) -> String {
    let mut lines: Vec<String> = history.iter().map(|m| format!("User: {}", m.text)).collect();
    lines.push(format!("User: {text}"));
    lines.join("\n")
}

#[async_trait]
impl ReplyProvider for GeminiGateway {
    async fn generate_reply(&self, user_id: UserId, text: &str) -> String {
        // Read the window first so no store lock is held across the
        // network round trip.
        let history = self.store.recent(user_id, self.recent_limit).await;
        let prompt = build_prompt(&history, text);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".into(),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                max_output_tokens: self.max_output_tokens,
            }),
        };

        match tokio::time::timeout(self.request_timeout, self.client.generate(&request)).await {
            Ok(Ok(body)) => {
                let reply = types::extract_text(&body);
                debug!(user_id = %user_id, reply_len = reply.len(), "reply generated");
                reply
            }
            Ok(Err(e)) => {
                warn!(user_id = %user_id, error = %e, "reply generation failed");
                FALLBACK_REPLY.to_string()
            }
            Err(_) => {
                warn!(user_id = %user_id, timeout = ?self.request_timeout, "reply generation timed out");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
