// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `specwright serve` command implementation.
//!
//! Wires storage, the two provider adapters, the conversion pipeline, and
//! the HTTP gateway together, then serves until interrupted.

use std::sync::Arc;

use specwright_config::SpecwrightConfig;
use specwright_core::error::SpecwrightError;
use specwright_core::{PluginAdapter, ProviderAdapter, StorageAdapter};
use specwright_gateway::{AuthTokens, GatewayState, HealthState, ServerConfig};
use specwright_gemini::GeminiProvider;
use specwright_groq::GroqProvider;
use specwright_router::ConversionPipeline;
use specwright_storage::SqliteStorage;
use tracing::info;

/// Runs the `specwright serve` command.
///
/// Initializes storage and both backends, then blocks on the gateway
/// server. Ctrl-C triggers a graceful shutdown with a WAL checkpoint.
pub async fn run_serve(config: SpecwrightConfig) -> Result<(), SpecwrightError> {
    init_tracing(&config.server.log_level);

    info!("starting specwright serve");

    // Initialize storage.
    let storage = Arc::new(SqliteStorage::new(config.storage.clone()));
    storage.initialize().await?;

    // Initialize both backends.
    let vision: Arc<dyn ProviderAdapter> = Arc::new(GeminiProvider::new(&config)?);
    let text: Arc<dyn ProviderAdapter> = Arc::new(GroqProvider::new(&config)?);

    let storage_dyn: Arc<dyn StorageAdapter> = storage.clone();
    let pipeline = Arc::new(ConversionPipeline::new(
        vision,
        text,
        Some(storage_dyn.clone()),
    ));

    let state = GatewayState {
        pipeline,
        storage: storage_dyn,
        auth: AuthTokens::from_entries(
            config
                .auth
                .tokens
                .iter()
                .map(|t| (t.token.clone(), t.user_id.clone())),
        ),
        health: HealthState {
            start_time: std::time::Instant::now(),
        },
    };

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    tokio::select! {
        result = specwright_gateway::start_server(&server_config, state) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
            storage.shutdown().await?;
            Ok(())
        }
    }
}

/// Initializes the tracing subscriber from the configured log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("specwright={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
