// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt assembly, backend selection, and the conversion pipeline.
//!
//! This crate provides:
//! - [`templates`]: system-prompt presets and mode-aware template selection
//! - [`route`]: the boolean-OR backend heuristic (vision vs. text)
//! - [`clean`]: Markdown fence stripping for model output
//! - [`ConversionPipeline`]: the linear select -> call -> clean -> record flow
//!
//! The pipeline intercepts every conversion request before any LLM call,
//! choosing between the vision/large-context backend and the fast
//! text-only backend based on the request's shape.

pub mod clean;
pub mod pipeline;
pub mod route;
pub mod templates;

pub use clean::clean_output;
pub use pipeline::ConversionPipeline;
pub use route::{BackendKind, RoutingDecision, choose_backend};
pub use templates::system_prompt_for;
