// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The conversion pipeline.
//!
//! Each call is a single linear pass: select template -> select backend ->
//! build prompt -> one provider call -> extract -> clean -> best-effort
//! history write -> respond. There is no retry and no cross-backend
//! fallback; a failed call or malformed payload aborts the conversion.

use std::sync::Arc;

use specwright_core::types::{
    ConversionMode, ConversionOutcome, ConversionRequest, HistoryRecord, ImageAttachment,
    PromptRequest,
};
use specwright_core::{ProviderAdapter, SpecwrightError, StorageAdapter};
use tracing::{debug, warn};

use crate::clean::clean_output;
use crate::route::{BackendKind, choose_backend};
use crate::templates::system_prompt_for;

/// Orchestrates one conversion across the two backends and the history store.
///
/// Stateless across calls; the only suspension points are the single
/// outbound provider call and the optional history write, awaited
/// sequentially.
pub struct ConversionPipeline {
    vision: Arc<dyn ProviderAdapter>,
    text: Arc<dyn ProviderAdapter>,
    storage: Option<Arc<dyn StorageAdapter>>,
}

impl ConversionPipeline {
    /// Creates a pipeline over the vision and text backends.
    ///
    /// `storage` is optional: without it, history recording is skipped
    /// entirely and conversions still succeed.
    pub fn new(
        vision: Arc<dyn ProviderAdapter>,
        text: Arc<dyn ProviderAdapter>,
        storage: Option<Arc<dyn StorageAdapter>>,
    ) -> Self {
        Self {
            vision,
            text,
            storage,
        }
    }

    /// Runs one conversion.
    ///
    /// `user_id` is the identity resolved by the caller, if any. History is
    /// written iff `request.mode` is unset AND an identity was resolved;
    /// a history write failure is logged and never surfaced.
    pub async fn convert(
        &self,
        request: &ConversionRequest,
        user_id: Option<&str>,
    ) -> Result<ConversionOutcome, SpecwrightError> {
        let system_prompt =
            system_prompt_for(request.mode, request.template, &request.page_object_library);
        let decision = choose_backend(request);
        debug!(backend = %decision.backend, reason = decision.reason, "backend selected");

        let prompt = PromptRequest {
            system_prompt,
            base_url: request.base_url.clone(),
            html_context: request.html_context.clone(),
            input: request.gherkin.clone(),
            image: request
                .screenshot
                .as_deref()
                .map(ImageAttachment::from_data_url),
        };

        let provider = match decision.backend {
            BackendKind::Vision => &self.vision,
            BackendKind::Text => &self.text,
        };

        let reply = provider.convert(&prompt).await?;
        let code = clean_output(&reply.text);
        let timestamp = chrono::Utc::now().to_rfc3339();

        self.record_history(request, user_id, &code, &reply.model_label, &timestamp)
            .await;

        Ok(ConversionOutcome {
            gherkin: (request.mode == Some(ConversionMode::Refactor)).then(|| code.clone()),
            analysis: (request.mode == Some(ConversionMode::Heal)).then(|| code.clone()),
            code,
            model_used: reply.model_label,
            timestamp,
        })
    }

    /// Best-effort history write.
    ///
    /// Performed only for standard conversions (no mode) with a resolved
    /// user identity. History is advisory: any failure is logged at `warn`
    /// and never joins the conversion result.
    async fn record_history(
        &self,
        request: &ConversionRequest,
        user_id: Option<&str>,
        code: &str,
        model_label: &str,
        timestamp: &str,
    ) {
        if request.mode.is_some() {
            return;
        }
        let (Some(user), Some(storage)) = (user_id, self.storage.as_ref()) else {
            return;
        };

        let record = HistoryRecord {
            id: uuid::Uuid::new_v4().to_string(),
            gherkin: request.gherkin.clone(),
            playwright: code.to_string(),
            base_url: request.base_url.clone(),
            model: model_label.to_string(),
            user_id: user.to_string(),
            timestamp: timestamp.to_string(),
        };

        if let Err(e) = storage.insert_record(&record).await {
            warn!(error = %e, user = user, "history write failed; conversion still succeeds");
        }
    }
}
