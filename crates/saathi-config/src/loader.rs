// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./saathi.toml` > `~/.config/saathi/saathi.toml` >
//! `/etc/saathi/saathi.toml` with environment variable overrides via the
//! `SAATHI_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::SaathiConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/saathi/saathi.toml` (system-wide)
/// 3. `~/.config/saathi/saathi.toml` (user XDG config)
/// 4. `./saathi.toml` (local directory)
/// 5. `SAATHI_*` environment variables
pub fn load_config() -> Result<SaathiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SaathiConfig::default()))
        .merge(Toml::file("/etc/saathi/saathi.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("saathi/saathi.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("saathi.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<SaathiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SaathiConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SaathiConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SaathiConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example, `SAATHI_TELEGRAM_BOT_TOKEN`
/// must map to `telegram.bot_token`, not `telegram.bot.token`.
fn env_provider() -> Env {
    Env::prefixed("SAATHI_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: SAATHI_GEMINI_API_KEY -> "gemini_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("telegram_", "telegram.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("memory_", "memory.", 1)
            .replacen("health_", "health.", 1);
        mapped.into()
    })
}
