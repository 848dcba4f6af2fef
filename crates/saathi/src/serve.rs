// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `saathi serve` command implementation.
//!
//! Wires the conversation store, janitor, alarm registry, Gemini gateway,
//! liveness endpoint, and Telegram dispatcher together, then runs until a
//! shutdown signal arrives.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};

use saathi_alarm::AlarmRegistry;
use saathi_config::SaathiConfig;
use saathi_core::error::SaathiError;
use saathi_core::traits::ReplyProvider;
use saathi_gemini::{GeminiClient, GeminiGateway};
use saathi_memory::{ConversationStore, Janitor};
use saathi_telegram::{BotDeps, TelegramChannel};

use crate::shutdown;

/// Runs the `saathi serve` command.
///
/// Starts the background janitor and health server, then drives the
/// Telegram dispatcher until a shutdown signal arrives.
pub async fn run_serve(config: SaathiConfig) -> Result<(), SaathiError> {
    init_tracing(&config.agent.log_level);

    info!(name = %config.agent.name, "starting saathi serve");

    let cancel = shutdown::install_signal_handler();

    // Conversation store plus its retention sweep.
    let store = Arc::new(ConversationStore::new());
    let janitor = Janitor::new(
        store.clone(),
        config.memory.retention_secs,
        Duration::from_secs(config.memory.sweep_interval_secs),
    );
    janitor.start(cancel.clone());

    // Telegram channel; its deliverer is what scheduled alarms fire through.
    let channel = TelegramChannel::new(&config.telegram)?;
    let registry = Arc::new(AlarmRegistry::new(Arc::new(channel.deliverer())));

    // Gemini reply provider with the store as its context source.
    let api_key = config
        .gemini
        .api_key
        .clone()
        .ok_or_else(|| SaathiError::Config("gemini.api_key is required for serve".into()))?;
    let client = GeminiClient::new(
        api_key,
        config.gemini.model.clone(),
        config.gemini.request_timeout_secs,
    )?;
    let provider: Arc<dyn ReplyProvider> = Arc::new(GeminiGateway::new(
        client,
        store.clone(),
        config.memory.recent_limit,
        config.gemini.max_output_tokens,
        Duration::from_secs(config.gemini.request_timeout_secs),
    ));

    // Liveness endpoint for hosting platform probes.
    {
        let health_config = saathi_health::ServerConfig {
            host: config.health.host.clone(),
            port: config.health.port,
        };
        let health_cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(e) = saathi_health::start_server(&health_config, health_cancel).await {
                error!(error = %e, "health server exited");
            }
        });
    }

    let deps = Arc::new(BotDeps {
        store,
        registry: registry.clone(),
        provider,
    });

    tokio::select! {
        _ = channel.run(deps) => {
            error!("Telegram dispatcher exited unexpectedly");
        }
        _ = cancel.cancelled() => {}
    }

    registry.shutdown().await;
    info!("saathi serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("saathi={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
