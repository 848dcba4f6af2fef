// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Out-of-band message delivery.

use async_trait::async_trait;

use crate::error::SaathiError;
use crate::types::UserId;

/// Sends a text to a user out-of-band (e.g. a Telegram message).
///
/// The alarm registry depends on this only as an injected collaborator;
/// failures are caught and logged by the fire path, never propagated into
/// the scheduling loop.
#[async_trait]
pub trait Deliverer: Send + Sync + 'static {
    /// Delivers `text` to `user_id`.
    async fn deliver(&self, user_id: UserId, text: &str) -> Result<(), SaathiError>;
}
