// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Specwright conversion service.

use thiserror::Error;

/// The primary error type used across all Specwright adapter traits and core operations.
#[derive(Debug, Error)]
pub enum SpecwrightError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// LLM backend call errors (network failure, non-2xx status, unreadable body).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The expected text field was absent from a provider response envelope.
    #[error("malformed response from {backend}: {detail}")]
    MalformedResponse { backend: String, detail: String },

    /// Gateway errors (bind failure, server error).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
