// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Three-tier splitting of one generated text blob into project files.
//!
//! Tier 1 honors explicit `// File: <path>` markers the model was asked to
//! emit. Tier 2 (POM template only) carves out `class <Name>Page` blocks by
//! regex. Tier 3 keeps the whole input as a single spec file. Splitting
//! never fails; malformed input degrades to the flat tier.
//!
//! The class heuristic is exactly that, a heuristic: the regex runs from
//! the `class` keyword to the first line consisting solely of `}` and
//! cannot balance nested braces. Input whose inner blocks close at column
//! zero will split early. This is documented behavior, not a parser.

use std::sync::LazyLock;

use regex::Regex;

use specwright_core::types::TemplateKind;

/// One file carved out of the generated text: a relative path and its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFile {
    /// Path relative to the archive root.
    pub path: String,
    /// Text content.
    pub content: String,
}

/// Directory page classes are extracted into.
const MODELS_DIR: &str = "models";

/// Spec file produced by the class-boundary tier.
const POM_SPEC_FILE: &str = "tests/gherkin.spec.ts";

/// Spec file produced by the flat tier.
const STEPS_SPEC_FILE: &str = "tests/steps.spec.ts";

/// Name of the Playwright configuration file.
const CONFIG_FILE: &str = "playwright.config.ts";

/// Default configuration injected when no tier produced one.
const DEFAULT_CONFIG: &str = "import { defineConfig } from '@playwright/test';\n\nexport default defineConfig({\n  testDir: './tests',\n  use: {\n    headless: true,\n  },\n});\n";

/// Import header prepended to every extracted page class file.
const MODEL_IMPORT_HEADER: &str = "import { Page, expect } from '@playwright/test';\n\n";

/// Matches an explicit file marker line: `// File: <path>`.
static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^//[ \t]*File:[ \t]*(\S+)[ \t]*$").expect("marker regex"));

/// Matches a page class block: `class <Name>Page` (capitalized,
/// case-sensitive) through the first line consisting solely of `}`.
static PAGE_CLASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?ms)(?:export\s+)?class\s+([A-Z]\w*Page)\b.*?^\}").expect("class regex")
});

/// Splits one blob of generated text into a set of project files.
///
/// Tiers are evaluated in order and the first one that produces files
/// wins. A default `playwright.config.ts` is injected when no tier
/// produced one, so every result carries it exactly once.
pub fn split_generated_text(text: &str, template: TemplateKind) -> Vec<ExtractedFile> {
    let mut files = split_by_markers(text);

    if files.is_empty() && template == TemplateKind::Pom {
        files = split_by_page_classes(text);
    }

    if files.is_empty() {
        files.push(ExtractedFile {
            path: STEPS_SPEC_FILE.to_string(),
            content: text.to_string(),
        });
    }

    ensure_config(&mut files);
    files
}

/// Tier 1: explicit `// File:` markers.
///
/// Each marker opens a file whose body runs to the next marker or end of
/// input. Paths are emitted verbatim; bodies are trimmed of the blank
/// separator lines around the markers.
fn split_by_markers(text: &str) -> Vec<ExtractedFile> {
    let markers: Vec<(String, usize, usize)> = MARKER_RE
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("match exists");
            (caps[1].to_string(), whole.start(), whole.end())
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, (path, _, body_start))| {
            let body_end = markers
                .get(i + 1)
                .map(|(_, next_start, _)| *next_start)
                .unwrap_or(text.len());
            ExtractedFile {
                path: path.clone(),
                content: text[*body_start..body_end].trim().to_string(),
            }
        })
        .collect()
}

/// Tier 2: `class <Name>Page` block extraction for the POM template.
///
/// Match spans are removed from the input via a fold over the ordered,
/// non-overlapping spans (never in-place mutation); the surviving text
/// becomes the spec file, prefixed with one import per extracted class.
fn split_by_page_classes(text: &str) -> Vec<ExtractedFile> {
    struct ClassMatch {
        name: String,
        start: usize,
        end: usize,
    }

    let matches: Vec<ClassMatch> = PAGE_CLASS_RE
        .captures_iter(text)
        .map(|caps| {
            let whole = caps.get(0).expect("match exists");
            ClassMatch {
                name: caps[1].to_string(),
                start: whole.start(),
                end: whole.end(),
            }
        })
        .collect();

    if matches.is_empty() {
        return Vec::new();
    }

    let mut files: Vec<ExtractedFile> = matches
        .iter()
        .map(|m| ExtractedFile {
            path: format!("{MODELS_DIR}/{}.ts", m.name),
            content: format!("{MODEL_IMPORT_HEADER}{}\n", &text[m.start..m.end]),
        })
        .collect();

    // Fold over the match spans, accumulating the text between them.
    let (mut remainder, tail_start) =
        matches
            .iter()
            .fold((String::new(), 0usize), |(mut acc, cursor), m| {
                acc.push_str(&text[cursor..m.start]);
                (acc, m.end)
            });
    remainder.push_str(&text[tail_start..]);

    let imports: String = matches
        .iter()
        .map(|m| format!("import {{ {} }} from '../{MODELS_DIR}/{}';\n", m.name, m.name))
        .collect();

    files.push(ExtractedFile {
        path: POM_SPEC_FILE.to_string(),
        content: format!("{imports}\n{}\n", remainder.trim()),
    });

    files
}

/// Injects the default configuration unless some tier already produced one.
fn ensure_config(files: &mut Vec<ExtractedFile>) {
    let has_config = files.iter().any(|f| {
        f.path == CONFIG_FILE || f.path.ends_with(&format!("/{CONFIG_FILE}"))
    });
    if !has_config {
        files.push(ExtractedFile {
            path: CONFIG_FILE.to_string(),
            content: DEFAULT_CONFIG.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(files: &[ExtractedFile]) -> Vec<&str> {
        files.iter().map(|f| f.path.as_str()).collect()
    }

    fn find<'a>(files: &'a [ExtractedFile], path: &str) -> &'a ExtractedFile {
        files
            .iter()
            .find(|f| f.path == path)
            .unwrap_or_else(|| panic!("missing file {path}, have: {:?}", paths(files)))
    }

    #[test]
    fn marker_tier_emits_each_marked_file_verbatim() {
        let text = "// File: a.ts\nconst a = 1;\n\n// File: b/c.ts\nconst c = 2;\n";
        let files = split_generated_text(text, TemplateKind::Pom);

        assert_eq!(find(&files, "a.ts").content, "const a = 1;");
        assert_eq!(find(&files, "b/c.ts").content, "const c = 2;");
        // Marked files plus the injected config, nothing else.
        assert_eq!(files.len(), 3);
    }

    #[test]
    fn marker_tier_skips_class_heuristic() {
        let text = "// File: only.ts\nclass LoginPage {\n  go() {}\n}\n";
        let files = split_generated_text(text, TemplateKind::Pom);

        // The class block stays inside the marked file; no models/ output.
        assert!(paths(&files).iter().all(|p| !p.starts_with("models/")));
        assert!(find(&files, "only.ts").content.contains("class LoginPage"));
    }

    #[test]
    fn marker_tier_respects_emitted_config() {
        let text = "// File: playwright.config.ts\nexport default {};\n\n// File: tests/a.spec.ts\ntest('a', ...);\n";
        let files = split_generated_text(text, TemplateKind::Pom);

        let configs: Vec<_> = files
            .iter()
            .filter(|f| f.path.ends_with("playwright.config.ts"))
            .collect();
        assert_eq!(configs.len(), 1, "config must appear exactly once");
        assert_eq!(configs[0].content, "export default {};");
    }

    #[test]
    fn class_tier_extracts_page_class_into_models() {
        let text = "class LoginPage {\n  async login() {\n    await this.page.goto('/');\n  }\n}\n\ntest('login works', async ({ page }) => {\n  const login = new LoginPage(page);\n});\n";
        let files = split_generated_text(text, TemplateKind::Pom);

        let model = find(&files, "models/LoginPage.ts");
        assert!(model.content.starts_with("import { Page, expect } from '@playwright/test';"));
        assert!(model.content.contains("class LoginPage {"));
        assert!(model.content.contains("async login()"));

        let spec = find(&files, "tests/gherkin.spec.ts");
        assert!(spec
            .content
            .contains("import { LoginPage } from '../models/LoginPage';"));
        assert!(spec.content.contains("test('login works'"));
        assert!(!spec.content.contains("async login()"), "class body must be removed");
    }

    #[test]
    fn class_tier_extracts_multiple_classes() {
        let text = "class LoginPage {\n  a() {}\n}\nclass CartPage {\n  b() {}\n}\ntest('flow', () => {});\n";
        let files = split_generated_text(text, TemplateKind::Pom);

        assert!(paths(&files).contains(&"models/LoginPage.ts"));
        assert!(paths(&files).contains(&"models/CartPage.ts"));

        let spec = find(&files, "tests/gherkin.spec.ts");
        assert!(spec.content.contains("import { LoginPage } from '../models/LoginPage';"));
        assert!(spec.content.contains("import { CartPage } from '../models/CartPage';"));
    }

    #[test]
    fn class_tier_ignores_classes_without_page_suffix() {
        let text = "class Helper {\n  x() {}\n}\ntest('x', () => {});\n";
        let files = split_generated_text(text, TemplateKind::Pom);

        // No Page-suffixed class: degrade to the flat tier.
        assert_eq!(find(&files, "tests/steps.spec.ts").content, text);
    }

    #[test]
    fn class_tier_requires_capitalized_name() {
        let text = "class loginPage {\n  x() {}\n}\n";
        let files = split_generated_text(text, TemplateKind::Pom);
        assert!(paths(&files).iter().all(|p| !p.starts_with("models/")));
    }

    #[test]
    fn step_defs_template_never_splits_classes() {
        let text = "class LoginPage {\n  a() {}\n}\ntest('x', () => {});\n";
        let files = split_generated_text(text, TemplateKind::StepDefs);

        assert_eq!(find(&files, "tests/steps.spec.ts").content, text);
        assert!(paths(&files).iter().all(|p| !p.starts_with("models/")));
    }

    #[test]
    fn flat_tier_keeps_input_verbatim() {
        let text = "test('whole file', async ({ page }) => {\n  await page.goto('/');\n});\n";
        let files = split_generated_text(text, TemplateKind::StepDefs);

        assert_eq!(find(&files, "tests/steps.spec.ts").content, text);
        assert_eq!(files.len(), 2); // spec + injected config
    }

    #[test]
    fn every_result_carries_config_exactly_once() {
        let inputs = [
            ("plain text", TemplateKind::StepDefs),
            ("// File: a.ts\nconst a = 1;", TemplateKind::Pom),
            ("class HomePage {\n  x() {}\n}\nrest", TemplateKind::Pom),
        ];
        for (text, template) in inputs {
            let files = split_generated_text(text, template);
            let count = files
                .iter()
                .filter(|f| f.path.ends_with("playwright.config.ts"))
                .count();
            assert_eq!(count, 1, "input {text:?} produced {count} configs");
        }
    }

    #[test]
    fn injected_config_points_at_tests_and_headless() {
        let files = split_generated_text("anything", TemplateKind::StepDefs);
        let config = find(&files, "playwright.config.ts");
        assert!(config.content.contains("testDir: './tests'"));
        assert!(config.content.contains("headless: true"));
    }

    #[test]
    fn empty_input_degrades_to_single_empty_spec() {
        let files = split_generated_text("", TemplateKind::Pom);
        assert_eq!(find(&files, "tests/steps.spec.ts").content, "");
    }

    #[test]
    fn nested_brace_at_column_zero_closes_block_early() {
        // Documented fragility: the regex stops at the first line that is
        // exactly `}`, even when it belongs to an inner block.
        let text = "class OddPage {\n  method() {\n}\n  more() {}\n}\n";
        let files = split_generated_text(text, TemplateKind::Pom);
        let model = find(&files, "models/OddPage.ts");
        assert!(!model.content.contains("more()"));
    }
}
