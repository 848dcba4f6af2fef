// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Saathi bot.
//!
//! Provides the shared types, error taxonomy, and the trait seams between
//! the concurrency core (conversation store, alarm registry) and its I/O
//! collaborators (Telegram delivery, Gemini reply generation).

pub mod error;
pub mod traits;
pub mod types;

pub use error::SaathiError;
pub use traits::{Deliverer, ReplyProvider};
pub use types::{AlarmSpec, Message, UserId};
