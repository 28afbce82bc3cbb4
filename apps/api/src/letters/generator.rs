//! Letter generation. Hands the prompt to the text generator and never fails.
//!
//! A generator error is logged and replaced by `GENERATION_ERROR_FRAGMENT`;
//! successful output is passed through untouched.

use serde::Serialize;
use tracing::{error, info};

use crate::llm_client::prompts::GENERATION_ERROR_FRAGMENT;
use crate::llm_client::TextGenerator;

/// HTML returned to the preview, and whether it is the fallback notice.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterContent {
    pub html: String,
    pub is_fallback: bool,
}

impl LetterContent {
    pub fn fallback() -> Self {
        Self {
            html: GENERATION_ERROR_FRAGMENT.to_string(),
            is_fallback: true,
        }
    }
}

pub async fn generate_letter_content(generator: &dyn TextGenerator, prompt: &str) -> LetterContent {
    match generator.generate(prompt).await {
        Ok(html) => {
            info!("Letter generated ({} chars)", html.len());
            LetterContent {
                html,
                is_fallback: false,
            }
        }
        Err(e) => {
            error!("Error generating letter content: {e}");
            LetterContent::fallback()
        }
    }
}
