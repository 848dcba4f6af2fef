// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the seams between Saathi's core and its
//! collaborators (message delivery, AI reply generation).

pub mod deliver;
pub mod provider;

pub use deliver::Deliverer;
pub use provider::ReplyProvider;
