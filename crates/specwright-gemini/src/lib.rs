// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Google Gemini backend adapter for the Specwright conversion service.
//!
//! This crate implements [`ProviderAdapter`] for the Gemini generateContent
//! API. Gemini is the vision/large-context backend: it receives the whole
//! prompt as a single user turn and can carry an inline screenshot.

pub mod client;
pub mod types;

use async_trait::async_trait;
use specwright_config::SpecwrightConfig;
use specwright_core::error::SpecwrightError;
use specwright_core::traits::{PluginAdapter, ProviderAdapter};
use specwright_core::types::{AdapterType, HealthStatus, PromptRequest, ProviderReply};
use tracing::{debug, info};

use crate::client::GeminiClient;
use crate::types::{Content, GenerateContentRequest, InlineData, Part};

/// Display label reported for conversions produced by this backend.
pub const GEMINI_MODEL_LABEL: &str = "Gemini 2.5 Flash (Context Aware)";

/// Gemini provider implementing [`ProviderAdapter`].
pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    /// Creates a new Gemini provider from the given configuration.
    ///
    /// # API Key Resolution
    /// 1. `config.gemini.api_key` if set
    /// 2. `GEMINI_API_KEY` environment variable
    /// 3. Returns error if neither is available
    pub fn new(config: &SpecwrightConfig) -> Result<Self, SpecwrightError> {
        let api_key = resolve_api_key(&config.gemini.api_key)?;
        let client = GeminiClient::new(api_key, config.gemini.model.clone())?;

        info!(model = config.gemini.model, "Gemini provider initialized");

        Ok(Self { client })
    }

    /// Creates a provider with an existing client (for testing).
    #[cfg(test)]
    fn with_client(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Converts a [`PromptRequest`] to a Gemini [`GenerateContentRequest`].
    ///
    /// The entire prompt collapses into one user-role turn: system prompt,
    /// base URL ("N/A" when absent), HTML context ("None provided" when
    /// absent), then the input text. A screenshot, when present, becomes a
    /// trailing `inline_data` part.
    fn to_generate_request(&self, request: &PromptRequest) -> GenerateContentRequest {
        let text = format!(
            "{}\nBase URL: {}\n\nHTML CONTEXT:\n{}\n\nGHERKIN:\n{}",
            request.system_prompt,
            request.base_url.as_deref().unwrap_or("N/A"),
            request.html_context.as_deref().unwrap_or("None provided"),
            request.input,
        );

        let mut parts = vec![Part::Text { text }];
        if let Some(ref image) = request.image {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.data.clone(),
                },
            });
        }

        GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
        }
    }
}

#[async_trait]
impl PluginAdapter for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Provider
    }

    async fn health_check(&self) -> Result<HealthStatus, SpecwrightError> {
        // The client is constructable; a full check would make an API call,
        // which we avoid to keep health checks token-free.
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), SpecwrightError> {
        debug!("Gemini provider shutting down");
        Ok(())
    }
}

#[async_trait]
impl ProviderAdapter for GeminiProvider {
    async fn convert(&self, request: &PromptRequest) -> Result<ProviderReply, SpecwrightError> {
        let api_request = self.to_generate_request(request);
        let response = self.client.generate_content(&api_request).await?;
        let text = response.extract_text()?;

        Ok(ProviderReply {
            text,
            model_label: GEMINI_MODEL_LABEL.to_string(),
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

    std::env::var("GEMINI_API_KEY").map_err(|_| {
        SpecwrightError::Config(
            "Gemini API key not found. Set gemini.api_key in config or GEMINI_API_KEY environment variable.".into(),
        )
    })
}
