// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wall-clock arithmetic for daily triggers.
//!
//! A daily alarm needs exactly one computation: the next strictly-future
//! occurrence of a fixed HH:MM in the local timezone. DST transitions are
//! handled by taking the earlier of an ambiguous pair (fall-back) and by
//! skipping to the following day when the time does not exist (spring-forward
//! gap).

use chrono::{DateTime, Days, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// Returns the next occurrence of `hour:minute` local time strictly after
/// `after`. `None` only for out-of-range inputs, which validated
/// [`AlarmSpec`](saathi_core::types::AlarmSpec)s never produce.
pub fn next_occurrence(
    after: DateTime<Local>,
    hour: u32,
    minute: u32,
) -> Option<DateTime<Local>> {
    let target = NaiveTime::from_hms_opt(hour, minute, 0)?;

    let first_day = if after.time() < target {
        after.date_naive()
    } else {
        after.date_naive().checked_add_days(Days::new(1))?
    };

    // At most a couple of days can be unresolvable (spring-forward gaps).
    let mut day = first_day;
    for _ in 0..3 {
        if let Some(dt) = resolve_local(day, target) {
            return Some(dt);
        }
        day = day.checked_add_days(Days::new(1))?;
    }
    None
}

/// Resolves a naive date+time in the local timezone, or `None` if the wall
/// clock skips over it.
fn resolve_local(date: NaiveDate, time: NaiveTime) -> Option<DateTime<Local>> {
    match Local.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earlier, _) => Some(earlier),
        LocalResult::None => None,
    }
}

/// Duration to sleep from `now` until `next`; zero if `next` has passed.
pub fn until(now: DateTime<Local>, next: DateTime<Local>) -> std::time::Duration {
    (next - now).to_std().unwrap_or_default()
}
