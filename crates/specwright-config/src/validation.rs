// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses, non-empty paths, and
//! duplicate auth tokens.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::SpecwrightConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &SpecwrightConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate server.host is not empty and looks like an IP or hostname.
    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    // Validate database_path is not empty.
    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    // Validate model identifiers are not empty.
    if config.gemini.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "gemini.model must not be empty".to_string(),
        });
    }
    if config.groq.model.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "groq.model must not be empty".to_string(),
        });
    }

    // Validate auth tokens: non-empty values, no duplicates.
    let mut seen_tokens = HashSet::new();
    for (i, entry) in config.auth.tokens.iter().enumerate() {
        if entry.token.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("auth.tokens[{i}].token must not be empty"),
            });
        }
        if entry.user_id.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("auth.tokens[{i}].user_id must not be empty"),
            });
        }
        if !seen_tokens.insert(&entry.token) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate token in [[auth.tokens]] at index {i}"),
            });
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
