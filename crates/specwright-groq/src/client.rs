// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Groq OpenAI-compatible chat completions API.
//!
//! Provides [`GroqClient`] which handles request construction,
//! bearer-token authentication, and response parsing.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use specwright_core::SpecwrightError;
use tracing::debug;

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// Base URL for the Groq chat completions API.
const API_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// HTTP client for Groq API communication.
///
/// Performs exactly one request per call. There is no retry, no backoff,
/// and no fallback; a failed call aborts the whole conversion.
#[derive(Debug, Clone)]
pub struct GroqClient {
    client: reqwest::Client,
    base_url: String,
}

impl GroqClient {
    /// Creates a new Groq API client.
    ///
    /// # Arguments
    /// * `api_key` - Groq API key, sent as a bearer Authorization header
    pub fn new(api_key: String) -> Result<Self, SpecwrightError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                SpecwrightError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(|e| SpecwrightError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Sends a chat completion request and returns the full response.
    pub async fn complete_chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, SpecwrightError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .map_err(|e| SpecwrightError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "chat completion response received");

        if status.is_success() {
            let body = response.text().await.map_err(|e| SpecwrightError::Provider {
                message: format!("failed to read response body: {e}"),
                source: Some(Box::new(e)),
            })?;
            let parsed: ChatCompletionResponse =
                serde_json::from_str(&body).map_err(|e| SpecwrightError::Provider {
                    message: format!("failed to parse API response: {e}"),
                    source: Some(Box::new(e)),
                })?;
            return Ok(parsed);
        }

        let body = response.text().await.unwrap_or_default();
        let error_msg = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
            format!(
                "Groq API error ({}): {}",
                api_err.error.type_.as_deref().unwrap_or("unknown"),
                api_err.error.message
            )
        } else {
            format!("API returned {status}: {body}")
        };
        Err(SpecwrightError::Provider {
            message: error_msg,
            source: None,
        })
    }
}
