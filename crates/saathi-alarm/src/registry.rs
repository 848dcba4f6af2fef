// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-user single-slot alarm registry.
//!
//! Each user holds at most one daily alarm. The registry owns the job
//! lifecycle: `set` cancels and reinstalls under one lock so a replacement
//! can never leave two live jobs for the same user, `remove` is an
//! idempotent cancel, and the per-job tokio task fires the injected
//! [`Deliverer`] at each local occurrence of the configured HH:MM.
//!
//! The alarm map and the conversation map are deliberately separate
//! synchronization domains; neither lock is ever taken while holding the
//! other.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Local;
use saathi_core::error::SaathiError;
use saathi_core::traits::Deliverer;
use saathi_core::types::{AlarmSpec, UserId};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::schedule;

/// Prefix applied to every delivered reminder.
const REMINDER_PREFIX: &str = "⏰ Reminder: ";

/// A scheduled job: the user's spec plus the task driving its daily trigger.
/// Dropping the entry aborts the task, so map removal is cancellation.
struct AlarmEntry {
    spec: AlarmSpec,
    handle: JoinHandle<()>,
}

impl Drop for AlarmEntry {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Thread-safe map of user to single scheduled daily alarm.
pub struct AlarmRegistry {
    deliverer: Arc<dyn Deliverer>,
    jobs: Mutex<HashMap<UserId, AlarmEntry>>,
}

impl AlarmRegistry {
    /// Creates a registry that fires alarms through `deliverer`.
    pub fn new(deliverer: Arc<dyn Deliverer>) -> Self {
        Self {
            deliverer,
            jobs: Mutex::new(HashMap::new()),
        }
    }

    /// Sets or replaces the user's daily alarm.
    ///
    /// Validates the time first, so a rejected call leaves any prior alarm
    /// untouched. Cancel-then-install happens under one lock: a brief
    /// both-absent window during replacement is acceptable, two live jobs
    /// for the same user never are.
    pub async fn set(
        &self,
        user_id: UserId,
        hour: u32,
        minute: u32,
        message: impl Into<String>,
    ) -> Result<(), SaathiError> {
        let spec = AlarmSpec::new(user_id, hour, minute, message)?;

        let mut jobs = self.jobs.lock().await;
        if jobs.remove(&user_id).is_some() {
            debug!(user_id = %user_id, "replacing existing alarm");
        }

        let deliverer = self.deliverer.clone();
        let job_spec = spec.clone();
        let handle = tokio::spawn(async move {
            run_daily(deliverer, job_spec).await;
        });

        jobs.insert(user_id, AlarmEntry { spec, handle });
        Ok(())
    }

    /// Cancels the user's alarm if present. Returns whether one existed;
    /// removing an absent alarm is a successful no-op.
    pub async fn remove(&self, user_id: UserId) -> bool {
        self.jobs.lock().await.remove(&user_id).is_some()
    }

    /// Read-only lookup of the user's configured alarm.
    pub async fn get(&self, user_id: UserId) -> Option<AlarmSpec> {
        self.jobs.lock().await.get(&user_id).map(|e| e.spec.clone())
    }

    /// Number of scheduled alarms.
    pub async fn count(&self) -> usize {
        self.jobs.lock().await.len()
    }

    /// Cancels every scheduled alarm.
    pub async fn shutdown(&self) {
        self.jobs.lock().await.clear();
    }
}

/// Daily trigger loop for one alarm. Sleeps to the next local occurrence,
/// fires, repeats until the owning task is aborted.
async fn run_daily(deliverer: Arc<dyn Deliverer>, spec: AlarmSpec) {
    loop {
        let now = Local::now();
        let Some(next) = schedule::next_occurrence(now, spec.hour, spec.minute) else {
            // Unreachable for a validated spec.
            error!(user_id = %spec.user_id, "unschedulable alarm spec, job exiting");
            return;
        };

        debug!(
            user_id = %spec.user_id,
            fire_at = %next.to_rfc3339(),
            "alarm sleeping until next fire"
        );
        tokio::time::sleep(schedule::until(now, next)).await;

        fire(deliverer.as_ref(), &spec).await;
    }
}

/// Invokes the delivery callback for one alarm occurrence.
///
/// Delivery failure is logged and swallowed here so it can never reach the
/// trigger loop above: a failed fire leaves the job scheduled for the next
/// day.
pub async fn fire(deliverer: &dyn Deliverer, spec: &AlarmSpec) {
    let text = format!("{REMINDER_PREFIX}{}", spec.message);
    if let Err(e) = deliverer.deliver(spec.user_id, &text).await {
        warn!(
            user_id = %spec.user_id,
            error = %e,
            "alarm delivery failed, job stays scheduled"
        );
    }
}
