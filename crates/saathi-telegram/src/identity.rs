// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hardcoded identity replies.
//!
//! A small set of keyword checks answered locally instead of going to the
//! AI backend.

const CREATOR_KEYWORDS: &[&str] = &["kisne banaya", "who made you", "creator"];

pub const CREATOR_REPLY: &str = "Mujhe Raj Dev ne banaya hai.";
pub const NAME_REPLY: &str = "Mera naam Raj Dev hai.";
pub const ORIGIN_REPLY: &str = "Main Assam, Lumding se hoon.";

/// Returns a canned identity reply if the text matches a known keyword,
/// or `None` to route the message to the AI backend.
pub fn identity_reply(text: &str) -> Option<&'static str> {
    if text.is_empty() {
        return None;
    }
    let t = text.to_lowercase();

    if CREATOR_KEYWORDS.iter().any(|k| t.contains(k)) {
        return Some(CREATOR_REPLY);
    }
    if t.contains("tumhara naam") || t.contains("what is your name") {
        return Some(NAME_REPLY);
    }
    if t.contains("kahan se ho") || t.contains("where are you from") {
        return Some(ORIGIN_REPLY);
    }
    None
}
