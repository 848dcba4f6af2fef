// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini reply provider for Saathi.
//!
//! [`GeminiClient`] talks to the generateContent endpoint;
//! [`GeminiGateway`] layers conversation context, a bounded timeout, and
//! a fixed fallback reply on top of it.

pub mod client;
pub mod gateway;
pub mod types;

pub use client::GeminiClient;
pub use gateway::{FALLBACK_REPLY, GeminiGateway};
