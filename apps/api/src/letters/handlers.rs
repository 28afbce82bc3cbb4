//! Axum route handlers for the Letters API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::pdf_file_name;
use crate::letters::generator::{generate_letter_content, LetterContent};
use crate::letters::models::{LetterCategory, LetterRequest};
use crate::letters::prompts::build_prompt;
use crate::letters::session::Submission;
use crate::letters::validation::validate_letter;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: LetterCategory,
    pub label: &'static str,
    pub joining_date_label: &'static str,
    pub required_fields: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLetterResponse {
    pub letter_id: Uuid,
    pub letter_type: &'static str,
    pub html: String,
    pub is_fallback: bool,
    pub file_name: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/letters/categories
pub async fn handle_list_categories() -> Json<Vec<CategoryInfo>> {
    Json(
        LetterCategory::ALL
            .iter()
            .map(|&category| CategoryInfo {
                id: category,
                label: category.label(),
                joining_date_label: category.joining_date_label(),
                required_fields: category.required_fields(),
            })
            .collect(),
    )
}

/// POST /api/v1/letters/prompt
///
/// Validates the form and returns the prompt that generation would send.
pub async fn handle_preview_prompt(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<Json<PromptResponse>, AppError> {
    validate_letter(&request)?;
    let prompt = build_prompt(&state.company, &request);
    Ok(Json(PromptResponse { prompt }))
}

/// POST /api/v1/letters/generate
///
/// validate → build prompt → text generator → HTML (or the fallback notice).
/// A generator failure still answers 200 with `isFallback: true`. Submitting
/// the same form again while its generation is outstanding answers 409.
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<Json<GenerateLetterResponse>, AppError> {
    let (submission, in_flight) = state.letter_sessions.submit(&state.company, request);
    let (session, prompt) = match submission {
        Submission::Generating { session, prompt } => (session, prompt),
        Submission::Invalid(session) => return Err(AppError::Validation(session.validation_errors)),
        Submission::Busy(session) => {
            warn!(
                "Rejected duplicate {} request for {}",
                session.form.letter_category.label(),
                session.form.candidate.name
            );
            return Err(AppError::Conflict(
                "A letter is already being generated for this form".to_string(),
            ))
        }
    };

    let letter_id = Uuid::new_v4();
    let category = session.form.letter_category;
    info!("Generating {} {}", category.label(), letter_id);

    let content = generate_letter_content(state.generator.as_ref(), &prompt).await;
    let session = session.complete(content);
    drop(in_flight);

    let file_name = pdf_file_name(category.label(), &session.form.candidate.name, None);
    let content = session.content.unwrap_or_else(LetterContent::fallback);

    Ok(Json(GenerateLetterResponse {
        letter_id,
        letter_type: category.label(),
        html: content.html,
        is_fallback: content.is_fallback,
        file_name,
    }))
}
