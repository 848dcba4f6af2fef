// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thread-safe rolling conversation memory.
//!
//! Keeps an append-only-per-user log of recent messages, evicted by age
//! through [`ConversationStore::sweep`]. The whole keyed map sits behind a
//! single async mutex: expected load is low-volume chat traffic, so one
//! map-granularity lock is simpler than sharding by user. Sharding is the
//! obvious optimization if contention ever shows up.

use std::collections::HashMap;

use saathi_core::types::{Message, UserId};
use tokio::sync::Mutex;
use tracing::debug;

/// In-memory per-user conversation log with time-based eviction.
///
/// This component cannot fail: every operation on it is a pure in-memory
/// data structure update. Lock hold time is bounded by the size of one
/// user's log (add/recent) or the map (sweep); no I/O ever happens under
/// the lock.
#[derive(Debug, Default)]
pub struct ConversationStore {
    logs: Mutex<HashMap<UserId, Vec<Message>>>,
}

impl ConversationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message with the current wall-clock timestamp, creating
    /// the user's log lazily if absent.
    pub async fn add(&self, user_id: UserId, text: impl Into<String>) {
        self.add_at(user_id, text, chrono::Utc::now().timestamp())
            .await;
    }

    /// Appends a message with an explicit timestamp.
    pub async fn add_at(&self, user_id: UserId, text: impl Into<String>, timestamp: i64) {
        let mut logs = self.logs.lock().await;
        logs.entry(user_id).or_default().push(Message {
            timestamp,
            text: text.into(),
        });
    }

    /// Returns the last `limit` messages for a user in chronological order
    /// (oldest of the selected window first). Fewer if the log is shorter;
    /// empty if no log exists. Read-only; never evicts.
    pub async fn recent(&self, user_id: UserId, limit: usize) -> Vec<Message> {
        let logs = self.logs.lock().await;
        match logs.get(&user_id) {
            Some(log) => {
                let start = log.len().saturating_sub(limit);
                log[start..].to_vec()
            }
            None => Vec::new(),
        }
    }

    /// Removes messages older than `now - retention_secs` from every log,
    /// dropping user keys whose logs become empty so inactive users do not
    /// pin memory. Returns the number of evicted messages.
    ///
    /// Holding the map lock for the whole pass makes the sweep atomic with
    /// respect to `add`: a message appended before the sweep observes the
    /// cutoff, one appended after is untouched, and nothing evicted can
    /// reappear.
    pub async fn sweep(&self, now: i64, retention_secs: i64) -> usize {
        let cutoff = now - retention_secs;
        let mut evicted = 0;

        let mut logs = self.logs.lock().await;
        logs.retain(|user_id, log| {
            let before = log.len();
            log.retain(|m| m.timestamp >= cutoff);
            evicted += before - log.len();
            if log.is_empty() {
                debug!(user_id = %user_id, "conversation log emptied, dropping key");
                false
            } else {
                true
            }
        });

        evicted
    }

    /// Number of users with a live log. Used by sweep logging and tests.
    pub async fn user_count(&self) -> usize {
        self.logs.lock().await.len()
    }
}
