// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Groq backend adapter for the Specwright conversion service.
//!
//! This crate implements [`ProviderAdapter`] for the Groq OpenAI-compatible
//! chat completions API. Groq is the fast text-only backend: it receives a
//! system message (prompt + base URL) and a user message (raw input) and
//! cannot carry images or oversized context.

pub mod client;
pub mod types;

use async_trait::async_trait;
use specwright_config::SpecwrightConfig;
use specwright_core::error::SpecwrightError;
use specwright_core::traits::{PluginAdapter, ProviderAdapter};
use specwright_core::types::{AdapterType, HealthStatus, PromptRequest, ProviderReply};
use tracing::{debug, info};

use crate::client::GroqClient;
use crate::types::{ChatCompletionRequest, ChatMessage};

/// Display label reported for conversions produced by this backend.
pub const GROQ_MODEL_LABEL: &str = "Groq (Llama 3.3 Fast)";

/// Groq provider implementing [`ProviderAdapter`].
pub struct GroqProvider {
    client: GroqClient,
    model: String,
}

impl GroqProvider {
    /// Creates a new Groq provider from the given configuration.
    ///
    /// # API Key Resolution
    /// 1. `config.groq.api_key` if set
    /// 2. `GROQ_API_KEY` environment variable
    /// 3. Returns error if neither is available
    pub fn new(config: &SpecwrightConfig) -> Result<Self, SpecwrightError> {
        let api_key = resolve_api_key(&config.groq.api_key)?;
        let client = GroqClient::new(api_key)?;

        info!(model = config.groq.model, "Groq provider initialized");

        Ok(Self {
            client,
            model: config.groq.model.clone(),
        })
    }

    /// Creates a provider with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: GroqClient, model: String) -> Self {
        Self { client, model }
    }

    /// Converts a [`PromptRequest`] to a Groq [`ChatCompletionRequest`].
    ///
    /// Two messages: a system message carrying the prompt plus the base URL
    /// ("N/A" when absent), and a user message carrying the raw input.
    fn to_chat_request(&self, request: &PromptRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: format!(
                        "{}\nBase URL: {}",
                        request.system_prompt,
                        request.base_url.as_deref().unwrap_or("N/A"),
                    ),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.input.clone(),
                },
            ],
        }
    }
}

#[async_trait]
impl PluginAdapter for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, SpecwrightError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), SpecwrightError> {
        debug!("Groq provider shutting down");
        Ok(())
    }
}

#[async_trait]
impl ProviderAdapter for GroqProvider {
    async fn convert(&self, request: &PromptRequest) -> Result<ProviderReply, SpecwrightError> {
        let api_request = self.to_chat_request(request);
        let response = self.client.complete_chat(&api_request).await?;
        let text = response.extract_text()?;

        Ok(ProviderReply {
            text,
            model_label: GROQ_MODEL_LABEL.to_string(),
        })
    }
}

/// Resolves the API key from config or environment.
fn resolve_api_key(config_key: &Option<String>) -> Result<String, SpecwrightError> {
    if let Some(key) = config_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }

    std::env::var("GROQ_API_KEY").map_err(|_| {
        SpecwrightError::Config(
            "Groq API key not found. Set groq.api_key in config or GROQ_API_KEY environment variable.".into(),
        )
    })
}
