// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock LLM provider adapter for deterministic testing.
//!
//! `MockProvider` implements `ProviderAdapter` with pre-configured replies,
//! enabling fast, CI-runnable tests without external API calls. Every prompt
//! it receives is recorded for later assertion.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use specwright_core::traits::adapter::PluginAdapter;
use specwright_core::traits::provider::ProviderAdapter;
use specwright_core::types::{AdapterType, HealthStatus, PromptRequest, ProviderReply};
use specwright_core::SpecwrightError;

/// One queued mock reply: a text response or a provider error message.
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

/// A mock LLM provider that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty,
/// a default "mock response" text is returned. Every received
/// [`PromptRequest`] is recorded.
pub struct MockProvider {
    label: String,
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    requests: Arc<Mutex<Vec<PromptRequest>>>,
}

impl MockProvider {
    /// Create a new mock provider with the given model label and an empty queue.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            replies: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock provider pre-loaded with the given text responses.
    pub fn with_responses(label: impl Into<String>, responses: Vec<String>) -> Self {
        let provider = Self::new(label);
        {
            let replies = Arc::clone(&provider.replies);
            let mut queue = replies.try_lock().expect("fresh mutex");
            queue.extend(responses.into_iter().map(MockReply::Text));
        }
        provider
    }

    /// Add a text response to the end of the queue.
    pub async fn add_response(&self, text: String) {
        self.replies.lock().await.push_back(MockReply::Text(text));
    }

    /// Add a provider error to the end of the queue.
    pub async fn add_error(&self, message: String) {
        self.replies.lock().await.push_back(MockReply::Error(message));
    }

    /// Returns copies of every prompt received so far, in call order.
    pub async fn recorded_requests(&self) -> Vec<PromptRequest> {
        self.requests.lock().await.clone()
    }

    /// Returns the number of calls received so far.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Pop the next reply, or return the default text.
    async fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| MockReply::Text("mock response".to_string()))
    }
}

#[async_trait]
impl PluginAdapter for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
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
        Ok(())
    }
}

#[async_trait]
impl ProviderAdapter for MockProvider {
    async fn convert(&self, request: &PromptRequest) -> Result<ProviderReply, SpecwrightError> {
        self.requests.lock().await.push(request.clone());

        match self.next_reply().await {
            MockReply::Text(text) => Ok(ProviderReply {
                text,
                model_label: self.label.clone(),
            }),
            MockReply::Error(message) => Err(SpecwrightError::Provider {
                message,
                source: None,
            }),
        }
    }
}
