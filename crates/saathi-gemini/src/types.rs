// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request and response types for the Gemini generateContent API.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// One conversational turn: a role plus its text parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

/// Candidate entry inside a structured generateContent response.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

/// The shapes a reply body may take.
///
/// The backend either returns a bare text field or the full candidates
/// structure. Variant order matters: a body carrying both fields resolves
/// to the direct text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReplyPayload {
    PlainText { text: String },
    Structured { candidates: Vec<Candidate> },
}

/// Error envelope returned by the Gemini API on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub status: String,
}

/// Resolves a response body to reply text.
///
/// Precedence: direct `text` field, then the first candidate's parts
/// joined together, then the stringified body as a last resort.
pub fn extract_text(body: &serde_json::Value) -> String {
    match serde_json::from_value::<ReplyPayload>(body.clone()) {
        Ok(ReplyPayload::PlainText { text }) if !text.is_empty() => text,
        Ok(ReplyPayload::Structured { candidates }) => candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| body.to_string()),
        _ => body.to_string(),
    }
}
