// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Output-format contract for every HTML-producing prompt.
pub const HTML_FRAGMENT_INSTRUCTION: &str = "\
The output MUST be a single block of well-structured HTML content, using tags like <p>, <strong>, <b>, <ul>, and <li> for formatting. \n\
Do NOT include <html>, <head>, or <body> tags. The entire response should be inside a single root <div> tag.";

/// Shown in place of generated content when the text-generation call fails.
pub const GENERATION_ERROR_FRAGMENT: &str = r#"<div class="text-red-500">
  <p><strong>Error:</strong> Failed to generate letter content.</p>
  <p>Please check your API key and network connection. The error details have been logged.</p>
</div>"#;
