// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generated-text splitting and zip packaging.
//!
//! Takes one blob of AI-generated source text, partitions it into a
//! directory of files (explicit markers > page-class heuristic > flat
//! fallback), injects a default Playwright configuration when absent, and
//! packages the result into downloadable zip bytes. Pure, CPU-only text
//! processing; never fails on malformed input.

pub mod bundle;
pub mod splitter;

pub use bundle::{ARCHIVE_ROOT, bundle_archive};
pub use splitter::{ExtractedFile, split_generated_text};
