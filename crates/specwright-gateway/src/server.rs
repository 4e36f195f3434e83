// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the conversion API.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use specwright_core::{SpecwrightError, StorageAdapter};
use specwright_router::ConversionPipeline;
use tower_http::cors::CorsLayer;

use crate::auth::AuthTokens;
use crate::handlers;

/// State for the unauthenticated health endpoint.
#[derive(Clone)]
pub struct HealthState {
    /// Process start time for uptime calculation.
    pub start_time: std::time::Instant,
}

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The conversion pipeline.
    pub pipeline: Arc<ConversionPipeline>,
    /// History storage, used by the history endpoints.
    pub storage: Arc<dyn StorageAdapter>,
    /// Bearer-token identity resolution.
    pub auth: AuthTokens,
    /// Health state.
    pub health: HealthState,
}

/// Gateway server configuration (mirrors ServerConfig from specwright-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Builds the gateway router over the given state.
///
/// Exposed separately from [`start_server`] so tests can drive the router
/// without binding a socket.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/api/convert", post(handlers::post_convert))
        .route(
            "/api/history",
            get(handlers::get_history).delete(handlers::delete_history),
        )
        .route("/api/archive", post(handlers::post_archive))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the gateway HTTP server.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), SpecwrightError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener =
        tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| SpecwrightError::Channel {
                message: format!("failed to bind gateway to {addr}: {e}"),
                source: Some(Box::new(e)),
            })?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| SpecwrightError::Channel {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
