// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `specwright doctor` command implementation.
//!
//! Runs diagnostic checks against the Specwright environment to identify
//! configuration issues before the server is started.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use specwright_config::model::SpecwrightConfig;
use specwright_config::validation::validate_config;
use specwright_core::SpecwrightError;
use specwright_storage::Database;

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: Duration,
}

/// Run the `specwright doctor` command.
///
/// With `--plain`, disables colored output.
pub async fn run_doctor(config: &SpecwrightConfig, plain: bool) -> Result<(), SpecwrightError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let results = vec![
        check_config(config),
        check_database(config).await,
        check_api_key("gemini key", &config.gemini.api_key, "GEMINI_API_KEY"),
        check_api_key("groq key", &config.groq.api_key, "GROQ_API_KEY"),
        check_auth_tokens(config),
    ];

    println!();
    println!("  specwright doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    for result in &results {
        let duration_ms = result.duration.as_millis();
        let symbol = match (use_color, &result.status) {
            (true, CheckStatus::Pass) => {
                use colored::Colorize;
                "✓".green().to_string()
            }
            (true, CheckStatus::Warn) => {
                use colored::Colorize;
                "!".yellow().to_string()
            }
            (true, CheckStatus::Fail) => {
                use colored::Colorize;
                "✗".red().to_string()
            }
            (false, CheckStatus::Pass) => "[OK]  ".to_string(),
            (false, CheckStatus::Warn) => "[WARN]".to_string(),
            (false, CheckStatus::Fail) => "[FAIL]".to_string(),
        };
        if result.status == CheckStatus::Fail {
            fail_count += 1;
        }
        println!(
            "    {symbol} {:<16} {} ({duration_ms}ms)",
            result.name, result.message
        );
    }

    println!("  {}", "-".repeat(50));
    if fail_count > 0 {
        println!("  {fail_count} check(s) failed");
        return Err(SpecwrightError::Internal(format!(
            "{fail_count} doctor check(s) failed"
        )));
    }
    println!("  all checks passed");
    Ok(())
}

/// Semantic validation of the loaded configuration.
fn check_config(config: &SpecwrightConfig) -> CheckResult {
    let start = Instant::now();
    match validate_config(config) {
        Ok(()) => CheckResult {
            name: "config".to_string(),
            status: CheckStatus::Pass,
            message: "configuration is valid".to_string(),
            duration: start.elapsed(),
        },
        Err(errors) => CheckResult {
            name: "config".to_string(),
            status: CheckStatus::Fail,
            message: format!("{} validation error(s)", errors.len()),
            duration: start.elapsed(),
        },
    }
}

/// Opens the configured database and runs a trivial query.
async fn check_database(config: &SpecwrightConfig) -> CheckResult {
    let start = Instant::now();
    let result = async {
        let db = Database::open(&config.storage.database_path, config.storage.wal_mode).await?;
        db.connection()
            .call(|conn| {
                conn.execute_batch("SELECT 1;")?;
                Ok(())
            })
            .await
            .map_err(|e: tokio_rusqlite::Error| SpecwrightError::Storage {
                source: Box::new(e),
            })?;
        db.close().await
    }
    .await;

    match result {
        Ok(()) => CheckResult {
            name: "database".to_string(),
            status: CheckStatus::Pass,
            message: format!("writable at {}", config.storage.database_path),
            duration: start.elapsed(),
        },
        Err(e) => CheckResult {
            name: "database".to_string(),
            status: CheckStatus::Fail,
            message: format!("{e}"),
            duration: start.elapsed(),
        },
    }
}

/// Verifies an API key is resolvable from config or environment.
fn check_api_key(name: &str, config_key: &Option<String>, env_var: &str) -> CheckResult {
    let start = Instant::now();
    let from_config = config_key.as_deref().is_some_and(|k| !k.is_empty());
    let from_env = std::env::var(env_var).is_ok_and(|v| !v.is_empty());

    let (status, message) = if from_config {
        (CheckStatus::Pass, "set in config".to_string())
    } else if from_env {
        (CheckStatus::Pass, format!("set via {env_var}"))
    } else {
        (
            CheckStatus::Fail,
            format!("not set (config or {env_var})"),
        )
    };

    CheckResult {
        name: name.to_string(),
        status,
        message,
        duration: start.elapsed(),
    }
}

/// Warns when no auth tokens are configured (history will be unreachable).
fn check_auth_tokens(config: &SpecwrightConfig) -> CheckResult {
    let start = Instant::now();
    let (status, message) = if config.auth.tokens.is_empty() {
        (
            CheckStatus::Warn,
            "no tokens configured; all requests are anonymous and history is disabled".to_string(),
        )
    } else {
        (
            CheckStatus::Pass,
            format!("{} token(s) configured", config.auth.tokens.len()),
        )
    };

    CheckResult {
        name: "auth".to_string(),
        status,
        message,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn check_api_key_passes_from_config() {
        let result = check_api_key("gemini key", &Some("AIza-test".into()), "SPECWRIGHT_TEST_NO_SUCH_VAR");
        assert_eq!(result.status, CheckStatus::Pass);
    }

    #[test]
    fn check_api_key_fails_when_unset() {
        let result = check_api_key("gemini key", &None, "SPECWRIGHT_TEST_NO_SUCH_VAR");
        assert_eq!(result.status, CheckStatus::Fail);
    }

    #[test]
    fn check_auth_tokens_warns_when_empty() {
        let config = SpecwrightConfig::default();
        let result = check_auth_tokens(&config);
        assert_eq!(result.status, CheckStatus::Warn);
    }

    #[tokio::test]
    async fn check_database_passes_on_writable_path() {
        let dir = tempdir().unwrap();
        let mut config = SpecwrightConfig::default();
        config.storage.database_path = dir
            .path()
            .join("doctor.db")
            .to_str()
            .unwrap()
            .to_string();

        let result = check_database(&config).await;
        assert_eq!(result.status, CheckStatus::Pass, "{}", result.message);
    }

    #[test]
    fn check_config_passes_on_defaults() {
        let result = check_config(&SpecwrightConfig::default());
        assert_eq!(result.status, CheckStatus::Pass);
    }
}
