// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./specwright.toml` > `~/.config/specwright/specwright.toml`
//! > `/etc/specwright/specwright.toml` with environment variable overrides via
//! the `SPECWRIGHT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::SpecwrightConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/specwright/specwright.toml` (system-wide)
/// 3. `~/.config/specwright/specwright.toml` (user XDG config)
/// 4. `./specwright.toml` (local directory)
/// 5. `SPECWRIGHT_*` environment variables
pub fn load_config() -> Result<SpecwrightConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SpecwrightConfig::default()))
        .merge(Toml::file("/etc/specwright/specwright.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("specwright/specwright.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("specwright.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<SpecwrightConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SpecwrightConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SpecwrightConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SpecwrightConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `SPECWRIGHT_GEMINI_API_KEY` must map to
/// `gemini.api_key`, not `gemini.api.key`.
fn env_provider() -> Env {
    Env::prefixed("SPECWRIGHT_").map(|key| {
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("server_", "server.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("groq_", "groq.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("auth_", "auth.", 1);
        mapped.into()
    })
}
