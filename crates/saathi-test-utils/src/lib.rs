// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock collaborators for deterministic Saathi tests.
//!
//! Provides [`MockDeliverer`] (records deliveries, optionally fails) and
//! [`CannedReplyProvider`] (fixed reply, records prompts).

pub mod mock_deliverer;
pub mod mock_provider;

pub use mock_deliverer::MockDeliverer;
pub use mock_provider::CannedReplyProvider;
