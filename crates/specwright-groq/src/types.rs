// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Groq OpenAI-compatible chat completion request/response types.

use serde::{Deserialize, Serialize};

use specwright_core::SpecwrightError;

// --- Request types ---

/// A request to the Groq chat completions API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier (e.g. "llama-3.3-70b-versatile").
    pub model: String,
    /// Conversation messages: one system message, one user message.
    pub messages: Vec<ChatMessage>,
}

/// A single message in the OpenAI-compatible chat format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system" or "user".
    pub role: String,
    /// Plain text content.
    pub content: String,
}

// --- Response types ---

/// A full response from the chat completions API.
///
/// Every field on the extraction path is optional; a missing step yields
/// [`SpecwrightError::MalformedResponse`] rather than a deserialization
/// failure or panic.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Generated choices (normally exactly one).
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

/// One generated choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The assistant message for this choice.
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

/// The message of a choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    /// Text content, when present.
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Extracts the reply text at `choices[0].message.content`.
    ///
    /// Any absent step on that path is a malformed response.
    pub fn extract_text(&self) -> Result<String, SpecwrightError> {
        let malformed = |detail: &str| SpecwrightError::MalformedResponse {
            backend: "groq".to_string(),
            detail: detail.to_string(),
        };

        self.choices
            .as_deref()
            .and_then(|c| c.first())
            .ok_or_else(|| malformed("no choices in response"))?
            .message
            .as_ref()
            .ok_or_else(|| malformed("choice has no message"))?
            .content
            .clone()
            .ok_or_else(|| malformed("message has no content"))
    }
}

/// API error response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable error message.
    pub message: String,
    /// Error type identifier.
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
}
