// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rolling per-user conversation memory for the Saathi bot.
//!
//! [`ConversationStore`] keeps the recent message window used to build AI
//! prompts; [`Janitor`] enforces the retention window in the background.
//! Everything here is ephemeral process memory; persistence across
//! restarts is out of scope.

pub mod janitor;
pub mod store;

pub use janitor::Janitor;
pub use store::ConversationStore;
