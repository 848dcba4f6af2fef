// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Saathi configuration system.

use saathi_config::diagnostic::{ConfigError, suggest_key};
use saathi_config::model::SaathiConfig;
use saathi_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_saathi_config() {
    let toml = r#"
[agent]
name = "test-bot"
log_level = "debug"

[telegram]
bot_token = "123:ABC"

[gemini]
api_key = "AIza-test"
model = "gemini-1.5-pro"
max_output_tokens = 256
request_timeout_secs = 10

[memory]
retention_secs = 3600
sweep_interval_secs = 60
recent_limit = 4

[health]
host = "127.0.0.1"
port = 9000
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "test-bot");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.telegram.bot_token.as_deref(), Some("123:ABC"));
    assert_eq!(config.gemini.api_key.as_deref(), Some("AIza-test"));
    assert_eq!(config.gemini.model, "gemini-1.5-pro");
    assert_eq!(config.gemini.max_output_tokens, 256);
    assert_eq!(config.gemini.request_timeout_secs, 10);
    assert_eq!(config.memory.retention_secs, 3600);
    assert_eq!(config.memory.sweep_interval_secs, 60);
    assert_eq!(config.memory.recent_limit, 4);
    assert_eq!(config.health.host, "127.0.0.1");
    assert_eq!(config.health.port, 9000);
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");

    assert_eq!(config.agent.name, "saathi");
    assert_eq!(config.agent.log_level, "info");
    assert!(config.telegram.bot_token.is_none());
    assert!(config.gemini.api_key.is_none());
    assert_eq!(config.gemini.model, "gemini-1.5-flash");
    assert_eq!(config.gemini.max_output_tokens, 512);
    assert_eq!(config.memory.retention_secs, 24 * 3600);
    assert_eq!(config.memory.sweep_interval_secs, 600);
    assert_eq!(config.memory.recent_limit, 6);
    assert_eq!(config.health.host, "0.0.0.0");
    assert_eq!(config.health.port, 8000);
}

/// Unknown field in [telegram] section produces an error.
#[test]
fn unknown_field_in_telegram_produces_error() {
    let toml = r#"
[telegram]
bot_tken = "abc"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("bot_tken"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[logging]
level = "debug"
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("logging"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Dot-notation merges behave like SAATHI_ env overrides (figment mapping).
#[test]
fn dot_notation_override_maps_to_bot_token() {
    use figment::{Figment, providers::Serialized};

    let config: SaathiConfig = Figment::new()
        .merge(Serialized::defaults(SaathiConfig::default()))
        .merge(("telegram.bot_token", "xyz-from-env"))
        .extract()
        .expect("should set bot_token via dot notation");

    assert_eq!(config.telegram.bot_token.as_deref(), Some("xyz-from-env"));
}

/// Missing config files are silently skipped (Figment's Toml::file behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        Figment,
        providers::{Format, Serialized, Toml},
    };

    let config: SaathiConfig = Figment::new()
        .merge(Serialized::defaults(SaathiConfig::default()))
        .merge(Toml::file("/nonexistent/path/saathi.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    assert_eq!(config.agent.name, "saathi");
}

/// Invalid type (string where number expected) produces a clear message.
#[test]
fn invalid_type_produces_clear_message() {
    let toml = r#"
[memory]
recent_limit = "lots"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("recent_limit"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// Unknown key errors carry a fuzzy suggestion through load_and_validate_str.
#[test]
fn diagnostic_error_includes_unknown_key() {
    let toml = r#"
[agent]
naem = "test"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(!errors.is_empty(), "should have at least one error");

    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys } if {
            key == "naem"
                && suggestion.as_deref() == Some("name")
                && valid_keys.contains("log_level")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'naem' with suggestion 'name', got: {errors:?}"
    );
}

/// suggest_key is exposed for reuse and behaves as documented.
#[test]
fn suggest_key_finds_close_match() {
    assert_eq!(
        suggest_key("api_kye", &["api_key", "model"]),
        Some("api_key".to_string())
    );
    assert!(suggest_key("qqqq", &["api_key", "model"]).is_none());
}

/// Validation runs after successful deserialization.
#[test]
fn validation_catches_zero_sweep_interval() {
    let toml = r#"
[memory]
sweep_interval_secs = 0
"#;

    let errors = load_and_validate_str(toml).expect_err("zero interval should fail");
    assert!(errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("sweep_interval_secs"))
    }));
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[agent]
name = "test"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.agent.name, "test");
}

/// ConfigError implements miette::Diagnostic and renders.
#[test]
fn config_error_renders_with_miette() {
    use miette::GraphicalReportHandler;

    let error = ConfigError::UnknownKey {
        key: "naem".to_string(),
        suggestion: Some("name".to_string()),
        valid_keys: "name, log_level".to_string(),
    };

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(buf.contains("naem"), "rendered report should mention the key");
}

/// Plain toml deserialization agrees with the figment path.
#[test]
fn toml_crate_deserializes_model_directly() {
    let toml_str = r#"
[gemini]
model = "gemini-1.5-flash"
"#;
    let config: SaathiConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.gemini.model, "gemini-1.5-flash");
}
