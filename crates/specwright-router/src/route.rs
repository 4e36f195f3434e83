// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Backend selection between the two LLM backends.
//!
//! The decision is a coarse boolean-OR heuristic, not a cost/latency
//! optimizer: anything that needs vision, extra context, or large input
//! goes to the vision/large-context backend; everything else goes to the
//! fast text-only backend. There is no ranking, no fallback, and no retry
//! across backends.

use specwright_core::types::{ConversionMode, ConversionRequest};

/// Gherkin length above which the input counts as large.
pub const GHERKIN_LENGTH_THRESHOLD: usize = 3000;

/// HTML context length above which the input counts as large.
pub const HTML_CONTEXT_THRESHOLD: usize = 1000;

/// The two LLM backends a conversion can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Vision-and-large-context backend (Gemini).
    Vision,
    /// Fast text-only backend (Groq).
    Text,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Vision => write!(f, "vision"),
            BackendKind::Text => write!(f, "text"),
        }
    }
}

/// Routing decision with a human-readable reason for logging.
#[derive(Debug, Clone)]
pub struct RoutingDecision {
    /// The backend selected for this request.
    pub backend: BackendKind,
    /// Which signal triggered the selection.
    pub reason: &'static str,
}

/// Selects a backend for the given request.
///
/// Routes to the vision backend if ANY of: a screenshot is present, HTML
/// context is present, the gherkin exceeds [`GHERKIN_LENGTH_THRESHOLD`],
/// the HTML context exceeds [`HTML_CONTEXT_THRESHOLD`], the page-object
/// library is non-empty, or mode is heal. Otherwise the text backend.
pub fn choose_backend(request: &ConversionRequest) -> RoutingDecision {
    let vision = |reason| RoutingDecision {
        backend: BackendKind::Vision,
        reason,
    };

    if request.screenshot.is_some() {
        return vision("screenshot present");
    }
    if request.mode == Some(ConversionMode::Heal) {
        return vision("heal mode");
    }
    if request.gherkin.len() > GHERKIN_LENGTH_THRESHOLD {
        return vision("gherkin exceeds length threshold");
    }
    if let Some(ref html) = request.html_context {
        if html.len() > HTML_CONTEXT_THRESHOLD {
            return vision("html context exceeds length threshold");
        }
        return vision("html context present");
    }
    if !request.page_object_library.is_empty() {
        return vision("page object library supplied");
    }

    RoutingDecision {
        backend: BackendKind::Text,
        reason: "text-only input",
    }
}
