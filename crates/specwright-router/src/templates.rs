// SPDX-FileCopyrightText: 2026 Specwright Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! System-prompt templates and template selection.
//!
//! Selection priority: refactor mode > heal mode > named template registry
//! (defaulting to POM). In standard conversion, a non-empty page-object
//! library is rendered into the prompt so the model reuses existing
//! methods and locators instead of regenerating them.

use specwright_core::types::{ConversionMode, PageObjectFile, TemplateKind};

/// Page Object Model conversion template.
pub const POM_TEMPLATE: &str = r#"
You are a Lead QA Automation Architect specializing in Playwright, TypeScript, and Page Object Model (POM) design.

Task: Convert the provided Gherkin into a CLEAN, scalable, production-ready Playwright suite.

Architecture Constraints:
1. Output ONLY valid TypeScript code.
2. Mandatory POM: Encapsulate locators and actions within a Page Class.
3. Decoupling: Use a 'BASE_URL' constant. Suggest where to save files (e.g., /models and /tests).
4. Selectors: Prioritize data-testids, IDs, or ARIA labels found in provided HTML context.
5. Reliability: Include 'await' for all async actions and assertions.
6. Clean Code: Include 'import { test, expect, Page } from "@playwright/test";'
7. No Markdown: Do not wrap code in ```typescript blocks.
"#;

/// Step-definitions conversion template.
pub const STEP_DEFS_TEMPLATE: &str = r#"
You are a Lead QA Automation Architect specializing in BDD and Playwright Step Definitions.

Task: Convert the provided Gherkin into modular Playwright Step Definitions (Experimental).

Architecture Constraints:
1. Output ONLY valid TypeScript code.
2. Structure: Define reusable step functions (Given, When, Then logic) and a main test block that calls them.
3. Reliability: Include 'await' for all async actions and assertions.
4. Clean Code: Include 'import { test, expect } from "@playwright/test";'
5. No Markdown: Do not wrap code in ```typescript blocks.
"#;

/// Refactor-mode instruction set: notes in, canonical Gherkin out, no code.
pub const REFACTOR_PROMPT: &str = r#"
You are a Senior BDD Analyst specializing in Gherkin syntax.

Task: Reformat the provided free-text testing notes into clean, canonical Gherkin.

Constraints:
1. Output ONLY Gherkin text using the keywords Feature, Scenario, Given, When, Then, And, But.
2. Do NOT generate any application or test code of any kind.
3. Preserve the intent of every note; split unrelated notes into separate Scenarios.
4. No Markdown: Do not wrap the output in ```gherkin blocks.
"#;

/// Heal-mode instruction set: propose a resilient locator from HTML context.
pub const HEAL_PROMPT: &str = r#"
You are a Playwright locator specialist.

Task: The provided HTML CONTEXT contains an element the current test fails to find. Propose the most resilient Playwright locator for it.

Constraints:
1. Start with a short analysis (2-3 sentences) of why the element is brittle and which attribute anchors the new locator.
2. Follow the analysis with the locator code, preferring getByTestId, getByRole, or stable IDs over positional CSS.
3. No Markdown: Do not wrap the output in ``` blocks.
"#;

/// Builds the full system prompt for a request.
///
/// Priority order, first match wins:
/// 1. Refactor mode: fixed Gherkin-reformatting instructions.
/// 2. Heal mode: fixed locator-healing instructions.
/// 3. Named template (`pom` / `step-defs`), defaulting to POM; with a
///    non-empty library appended for reuse.
pub fn system_prompt_for(
    mode: Option<ConversionMode>,
    template: TemplateKind,
    library: &[PageObjectFile],
) -> String {
    match mode {
        Some(ConversionMode::Refactor) => REFACTOR_PROMPT.to_string(),
        Some(ConversionMode::Heal) => HEAL_PROMPT.to_string(),
        None => {
            let base = match template {
                TemplateKind::Pom => POM_TEMPLATE,
                TemplateKind::StepDefs => STEP_DEFS_TEMPLATE,
            };
            if library.is_empty() {
                base.to_string()
            } else {
                format!("{base}{}", render_library(library))
            }
        }
    }
}

/// Renders the page-object library as a prompt appendix.
fn render_library(library: &[PageObjectFile]) -> String {
    let mut rendered = String::from(
        "\nEXISTING PAGE OBJECT LIBRARY:\nReuse the methods and locators below instead of regenerating them. Import these classes rather than redefining them.\n",
    );
    for file in library {
        rendered.push_str(&format!("\n--- {} ---\n{}\n", file.name, file.content));
    }
    rendered
}
