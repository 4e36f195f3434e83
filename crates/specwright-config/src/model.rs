// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Specwright conversion service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Specwright configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpecwrightConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Gemini (vision/large-context backend) API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Groq (fast text-only backend) API settings.
    #[serde(default)]
    pub groq: GroqConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Static bearer-token authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Gemini API configuration (vision/large-context backend).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. `None` requires the `GEMINI_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier used for generateContent requests.
    #[serde(default = "default_gemini_model")]
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Groq API configuration (fast text-only backend).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GroqConfig {
    /// Groq API key. `None` requires the `GROQ_API_KEY` environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier used for chat completion requests.
    #[serde(default = "default_groq_model")]
    pub model: String,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_groq_model(),
        }
    }
}

fn default_groq_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("specwright").join("specwright.db"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "specwright.db".to_string())
}

fn default_wal_mode() -> bool {
    true
}

/// Static bearer-token authentication configuration.
///
/// The session framework itself is an external collaborator; Specwright
/// only resolves a bearer token to a user identity.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Token-to-user mappings. An empty list means every request is anonymous.
    #[serde(default)]
    pub tokens: Vec<AuthTokenConfig>,
}

/// One bearer token mapped to a user identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthTokenConfig {
    /// The bearer token value.
    pub token: String,
    /// The user identity the token resolves to.
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = SpecwrightConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8787);
        assert_eq!(config.server.log_level, "info");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert_eq!(config.groq.model, "llama-3.3-70b-versatile");
        assert!(config.gemini.api_key.is_none());
        assert!(config.groq.api_key.is_none());
        assert!(config.storage.wal_mode);
        assert!(config.auth.tokens.is_empty());
    }

    #[test]
    fn auth_tokens_deserialize_from_toml() {
        let toml_str = r#"
[[auth.tokens]]
token = "tok-alice"
user_id = "alice"

[[auth.tokens]]
token = "tok-bob"
user_id = "bob"
"#;
        let config: SpecwrightConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.auth.tokens.len(), 2);
        assert_eq!(config.auth.tokens[0].user_id, "alice");
        assert_eq!(config.auth.tokens[1].token, "tok-bob");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
prot = 9000
"#;
        let result = toml::from_str::<SpecwrightConfig>(toml_str);
        assert!(result.is_err());
    }
}
