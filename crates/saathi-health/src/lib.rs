// SPDX-FileCopyrightText: 2026 Saathi Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP liveness endpoint built on axum.
//!
//! Serves `GET /` with a 200 banner so hosting platforms can probe the
//! process. Shuts down gracefully when the cancellation token fires.

use axum::{Router, routing::get};
use tokio_util::sync::CancellationToken;

use saathi_core::error::SaathiError;

/// Banner returned by the liveness endpoint.
pub const LIVENESS_BANNER: &str = "✅ Saathi bot is online";

/// Server configuration (mirrors HealthConfig from saathi-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

async fn get_liveness() -> &'static str {
    LIVENESS_BANNER
}

/// Builds the health router.
pub fn router() -> Router {
    Router::new().route("/", get(get_liveness))
}

/// Starts the liveness server and serves until `cancel` fires.
pub async fn start_server(
    config: &ServerConfig,
    cancel: CancellationToken,
) -> Result<(), SaathiError> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| SaathiError::Channel {
            message: format!("failed to bind health server to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("health server listening on {addr}");

    axum::serve(listener, router())
        .with_graceful_shutdown(async move { cancel.cancelled().await })
        .await
        .map_err(|e| SaathiError::Channel {
            message: format!("health server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
