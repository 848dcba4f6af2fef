// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Periodic background sweep enforcing the retention window.
//!
//! The janitor owns nothing beyond its interval, the retention window, and
//! a handle to the store. A sweep cannot fail, so the loop only ever logs
//! and continues; it exits solely on cancellation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::store::ConversationStore;

/// Long-lived task that sweeps the conversation store at a fixed interval.
pub struct Janitor {
    store: Arc<ConversationStore>,
    retention_secs: i64,
    interval: Duration,
    started: AtomicBool,
}

impl Janitor {
    /// Creates a janitor sweeping `store` every `interval`, evicting
    /// messages older than `retention_secs`.
    pub fn new(store: Arc<ConversationStore>, retention_secs: i64, interval: Duration) -> Self {
        Self {
            store,
            retention_secs,
            interval,
            started: AtomicBool::new(false),
        }
    }

    /// Spawns the sweep loop. Idempotent: the first call starts the task,
    /// later calls are no-ops. The task runs until `cancel` fires.
    pub fn start(&self, cancel: CancellationToken) {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!("janitor already started, ignoring duplicate start");
            return;
        }

        let store = self.store.clone();
        let retention_secs = self.retention_secs;
        let period = self.interval;

        info!(
            interval_secs = period.as_secs(),
            retention_secs, "janitor started"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // Skip the immediate first tick; nothing can be stale at startup.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let now = chrono::Utc::now().timestamp();
                        let evicted = store.sweep(now, retention_secs).await;
                        if evicted > 0 {
                            let users = store.user_count().await;
                            debug!(evicted, users, "janitor sweep");
                        }
                    }
                    _ = cancel.cancelled() => {
                        info!("janitor shutting down");
                        break;
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use saathi_core::types::UserId;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn janitor_sweeps_on_interval() {
        let store = Arc::new(ConversationStore::new());
        // Stale well beyond any retention window.
        store.add_at(UserId(1), "ancient", 0).await;

        let janitor = Janitor::new(store.clone(), 60, Duration::from_secs(10));
        let cancel = CancellationToken::new();
        janitor.start(cancel.clone());

        // Advance past one interval tick; the spawned task runs under the
        // paused clock.
        tokio::time::sleep(Duration::from_secs(11)).await;

        assert_eq!(store.user_count().await, 0, "stale log should be swept");
        cancel.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn start_is_idempotent() {
        let store = Arc::new(ConversationStore::new());
        let janitor = Janitor::new(store.clone(), 60, Duration::from_secs(10));
        let cancel = CancellationToken::new();

        janitor.start(cancel.clone());
        janitor.start(cancel.clone());
        janitor.start(cancel.clone());

        // With multiple loops running, a fresh message would still survive;
        // the real check is that duplicate starts do not panic or spawn
        // duplicate sweeps that evict live data.
        store
            .add_at(UserId(1), "fresh", chrono::Utc::now().timestamp())
            .await;
        tokio::time::sleep(Duration::from_secs(11)).await;
        assert_eq!(store.user_count().await, 1);
        cancel.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn cancellation_stops_the_loop() {
        let store = Arc::new(ConversationStore::new());
        let janitor = Janitor::new(store.clone(), 0, Duration::from_secs(10));
        let cancel = CancellationToken::new();
        janitor.start(cancel.clone());

        cancel.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        // After cancellation, no sweep runs: a message older than the
        // (zero-second) retention window is left alone.
        store.add_at(UserId(1), "left alone", 0).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(store.user_count().await, 1);
    }
}
