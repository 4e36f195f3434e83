// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini generateContent API request/response types.

use serde::{Deserialize, Serialize};

use specwright_core::SpecwrightError;

// --- Request types ---

/// A request to the Gemini generateContent API.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents. Specwright always sends a single user turn.
    pub contents: Vec<Content>,
}

/// A single content turn in the Gemini conversation format.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Role: always "user" for conversion requests.
    pub role: String,
    /// Typed content parts (text, inline image data).
    pub parts: Vec<Part>,
}

/// A typed part within a content turn.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    /// Text part.
    Text { text: String },
    /// Inline base64 image data part.
    InlineData { inline_data: InlineData },
}

/// Inline image payload for a content part.
#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    /// MIME type (e.g. "image/png").
    pub mime_type: String,
    /// Base64-encoded image data (no data-URL prefix).
    pub data: String,
}

// --- Response types ---

/// A full response from the generateContent API.
///
/// Every field on the extraction path is optional; a missing step yields
/// [`SpecwrightError::MalformedResponse`] rather than a deserialization
/// failure or panic.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates (normally exactly one).
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

/// One generated candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// The candidate's content.
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// Content of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Content parts.
    #[serde(default)]
    pub parts: Option<Vec<CandidatePart>>,
}

/// One part of a candidate's content.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    /// Text payload, when the part is textual.
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the reply text at `candidates[0].content.parts[0].text`.
    ///
    /// Any absent step on that path is a malformed response.
    pub fn extract_text(&self) -> Result<String, SpecwrightError> {
        let malformed = |detail: &str| SpecwrightError::MalformedResponse {
            backend: "gemini".to_string(),
            detail: detail.to_string(),
        };

        self.candidates
            .as_deref()
            .and_then(|c| c.first())
            .ok_or_else(|| malformed("no candidates in response"))?
            .content
            .as_ref()
            .ok_or_else(|| malformed("candidate has no content"))?
            .parts
            .as_deref()
            .and_then(|p| p.first())
            .ok_or_else(|| malformed("candidate content has no parts"))?
            .text
            .clone()
            .ok_or_else(|| malformed("first content part is not text"))
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
    /// Error status identifier (e.g. "INVALID_ARGUMENT").
    #[serde(default)]
    pub status: Option<String>,
}
