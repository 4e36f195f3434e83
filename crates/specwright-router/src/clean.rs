// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output cleaning for generated code.
//!
//! Models are told not to wrap output in Markdown fences, but they
//! sometimes do anyway. All fence markers are stripped before the result
//! is returned or persisted.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a code fence marker with an optional known language tag.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```(?:typescript|javascript|gherkin)?").expect("fence regex is valid")
});

/// Strips Markdown code-fence markers and trims surrounding whitespace.
pub fn clean_output(raw: &str) -> String {
    FENCE_RE.replace_all(raw, "").trim().to_string()
}
