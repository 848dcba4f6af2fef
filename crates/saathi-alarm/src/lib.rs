// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily alarm scheduling for the Saathi bot.
//!
//! [`AlarmRegistry`] keeps one scheduled daily reminder per user and drives
//! delivery through an injected [`Deliverer`](saathi_core::Deliverer).
//! The `schedule` module supplies the local wall-clock arithmetic.

pub mod registry;
pub mod schedule;

pub use registry::{AlarmRegistry, fire};
