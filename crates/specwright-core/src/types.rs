// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Specwright service.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Named system-prompt preset shaping the style of generated test code.
///
/// Unknown template strings on the wire fall back to [`TemplateKind::Pom`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TemplateKind {
    /// Page Object Model suite: page classes plus a spec file.
    #[default]
    Pom,
    /// Flat step-definition suite.
    StepDefs,
}

impl TemplateKind {
    /// Parses a wire template string, falling back to `Pom` when unmatched.
    pub fn from_wire(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

/// Serde helper: deserializes an optional template string, falling back to
/// `Pom` when the field is absent or carries an unknown name.
pub fn deserialize_template<'de, D>(deserializer: D) -> Result<TemplateKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().map(TemplateKind::from_wire).unwrap_or_default())
}

/// Optional request flag overriding normal conversion behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConversionMode {
    /// Reformat free-text notes into canonical Gherkin keywords.
    Refactor,
    /// Propose a resilient element locator from HTML context.
    Heal,
}

/// A previously generated page-object file supplied for context reuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageObjectFile {
    /// File name (e.g. "LoginPage.ts").
    pub name: String,
    /// File content.
    pub content: String,
}

/// A single conversion request. Transient, one per call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    /// Gherkin scenario text (or free-text notes in refactor mode).
    pub gherkin: String,

    /// Output template. Defaults to `pom` when absent or unmatched.
    #[serde(default, deserialize_with = "deserialize_template")]
    pub template: TemplateKind,

    /// Base URL the generated tests should target.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Screenshot as a base64 data URL.
    #[serde(default)]
    pub screenshot: Option<String>,

    /// Raw HTML context for selector grounding.
    #[serde(default)]
    pub html_context: Option<String>,

    /// Mode override: refactor or heal. Absent means standard conversion.
    #[serde(default)]
    pub mode: Option<ConversionMode>,

    /// Previously generated page-object files to reuse.
    #[serde(default)]
    pub page_object_library: Vec<PageObjectFile>,
}

/// The result of one conversion. Transient; persisted separately when
/// history recording succeeds.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOutcome {
    /// Cleaned generated code or text.
    pub code: String,

    /// Refactored Gherkin. Populated only in refactor mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gherkin: Option<String>,

    /// Locator analysis. Populated only in heal mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,

    /// Label identifying which backend produced the output.
    pub model_used: String,

    /// ISO 8601 timestamp of the conversion.
    pub timestamp: String,
}

/// A persisted past conversion, scoped to the user who made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Unique record identifier (UUID v4).
    pub id: String,
    /// Original Gherkin input.
    pub gherkin: String,
    /// Generated Playwright code.
    pub playwright: String,
    /// Base URL supplied with the request.
    pub base_url: Option<String>,
    /// Backend label that produced the code.
    pub model: String,
    /// Owning user identifier. Records are visible only to their owner.
    pub user_id: String,
    /// ISO 8601 creation timestamp.
    pub timestamp: String,
}

/// An inline image attached to a prompt (base64, data-URL prefix stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    /// MIME type (e.g. "image/png").
    pub mime_type: String,
    /// Base64-encoded image data without any data-URL prefix.
    pub data: String,
}

impl ImageAttachment {
    /// Builds an attachment from a browser data URL.
    ///
    /// Everything up to and including the first comma is stripped; input
    /// without a comma is taken as already-bare base64.
    pub fn from_data_url(data_url: &str) -> Self {
        let data = match data_url.split_once(',') {
            Some((_, payload)) => payload.to_string(),
            None => data_url.to_string(),
        };
        Self {
            mime_type: "image/png".to_string(),
            data,
        }
    }
}

/// The provider-neutral prompt each backend shapes into its own wire format.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    /// Fully assembled system prompt (template + optional library rendering).
    pub system_prompt: String,
    /// Base URL, rendered as "N/A" on the wire when absent.
    pub base_url: Option<String>,
    /// HTML context, rendered as "None provided" on the wire when absent.
    pub html_context: Option<String>,
    /// The Gherkin (or free-text) input.
    pub input: String,
    /// Optional screenshot attachment.
    pub image: Option<ImageAttachment>,
}

/// A provider's extracted, uncleaned text reply.
#[derive(Debug, Clone)]
pub struct ProviderReply {
    /// Raw text extracted from the provider's response envelope.
    pub text: String,
    /// Display label identifying the backend (e.g. "Gemini 2.5 Flash (Context Aware)").
    pub model_label: String,
}

/// Identifies the type of adapter in the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum AdapterType {
    Provider,
    Storage,
    Channel,
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}
