// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini generateContent API.
//!
//! Provides [`GeminiClient`] which handles request construction,
//! query-parameter authentication, and response parsing. The API key
//! travels as a `?key=` query parameter; no Authorization header is sent.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use specwright_core::SpecwrightError;
use tracing::debug;

use crate::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Base URL for the Gemini generateContent API.
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// HTTP client for Gemini API communication.
///
/// Performs exactly one request per call. There is no retry, no backoff,
/// and no fallback; a failed call aborts the whole conversion.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new Gemini API client.
    ///
    /// # Arguments
    /// * `api_key` - Gemini API key, sent as a query parameter
    /// * `model` - Model identifier (e.g. "gemini-2.5-flash")
    pub fn new(api_key: String, model: String) -> Result<Self, SpecwrightError> {
        let mut headers = HeaderMap::new();
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
            api_key,
            model,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Returns the configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Overrides the base URL (for testing with wiremock).
    #[cfg(test)]
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    /// Sends a generateContent request and returns the full response.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, SpecwrightError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| SpecwrightError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "generateContent response received");

        if status.is_success() {
            let body = response.text().await.map_err(|e| SpecwrightError::Provider {
                message: format!("failed to read response body: {e}"),
                source: Some(Box::new(e)),
            })?;
            let parsed: GenerateContentResponse =
                serde_json::from_str(&body).map_err(|e| SpecwrightError::Provider {
                    message: format!("failed to parse API response: {e}"),
                    source: Some(Box::new(e)),
                })?;
            return Ok(parsed);
        }

        let body = response.text().await.unwrap_or_default();
        let error_msg = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
            format!(
                "Gemini API error ({}): {}",
                api_err.error.status.as_deref().unwrap_or("unknown"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Content, Part};
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GeminiClient {
        GeminiClient::new("test-api-key".into(), "gemini-2.5-flash".into())
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    fn test_request() -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: "user".into(),
                parts: vec![Part::Text {
                    text: "Feature: Login".into(),
                }],
            }],
        }
    }

    #[tokio::test]
    async fn generate_content_success() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "test('login', ...)"}], "role": "model"}}
            ]
        });

        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(query_param("key", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.generate_content(&test_request()).await.unwrap();
        assert_eq!(result.extract_text().unwrap(), "test('login', ...)");
    }

    #[tokio::test]
    async fn generate_content_sends_user_role_payload() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "ok"}]}}]
        });

        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{"role": "user"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        assert!(client.generate_content(&test_request()).await.is_ok());
    }

    #[tokio::test]
    async fn generate_content_fails_on_400() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}
        });

        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate_content(&test_request()).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("INVALID_ARGUMENT"), "got: {msg}");
        assert!(msg.contains("API key not valid"), "got: {msg}");
    }

    #[tokio::test]
    async fn generate_content_does_not_retry_on_503() {
        let server = MockServer::start().await;

        // A single 503 must fail the call outright.
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.generate_content(&test_request()).await;
        assert!(result.is_err());
    }
}
