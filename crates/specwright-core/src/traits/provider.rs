// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider adapter trait for LLM backend integrations (Gemini, Groq).

use async_trait::async_trait;

use crate::error::SpecwrightError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{PromptRequest, ProviderReply};

/// Adapter for LLM backend integrations.
///
/// Provider adapters shape a [`PromptRequest`] into their own wire format,
/// perform exactly one outbound HTTP call, and extract the text reply from
/// their provider-specific response envelope. There is no retry, no
/// fallback across backends, and no streaming.
#[async_trait]
pub trait ProviderAdapter: PluginAdapter {
    /// Sends the prompt to the backend and returns the extracted text reply.
    ///
    /// Fails with [`SpecwrightError::Provider`] on network or non-2xx
    /// failures and [`SpecwrightError::MalformedResponse`] when the expected
    /// text field is absent from the response envelope.
    async fn convert(&self, request: &PromptRequest) -> Result<ProviderReply, SpecwrightError>;
}
