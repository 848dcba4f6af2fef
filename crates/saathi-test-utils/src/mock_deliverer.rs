// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock delivery callback for deterministic testing.
//!
//! `MockDeliverer` implements [`Deliverer`] by recording every delivery,
//! with a switch to simulate transport failure.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use saathi_core::error::SaathiError;
use saathi_core::traits::Deliverer;
use saathi_core::types::UserId;

/// A delivery callback that records deliveries instead of sending them.
#[derive(Default)]
pub struct MockDeliverer {
    delivered: Arc<Mutex<Vec<(UserId, String)>>>,
    attempts: AtomicUsize,
    fail: AtomicBool,
}

impl MockDeliverer {
    /// Creates a mock that succeeds on every delivery.
    pub fn new() -> Self {
        Self::default()
    }

    /// When `fail` is true, subsequent deliveries error instead of
    /// recording.
    pub fn fail_next(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// All successfully delivered (user, text) pairs, in call order.
    pub async fn delivered(&self) -> Vec<(UserId, String)> {
        self.delivered.lock().await.clone()
    }

    /// Total delivery attempts, successful or not.
    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Deliverer for MockDeliverer {
    async fn deliver(&self, user_id: UserId, text: &str) -> Result<(), SaathiError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.fail.load(Ordering::SeqCst) {
            return Err(SaathiError::Delivery {
                user_id: user_id.0,
                message: "simulated transport failure".into(),
                source: None,
            });
        }

        self.delivered
            .lock()
            .await
            .push((user_id, text.to_string()));
        Ok(())
    }
}
