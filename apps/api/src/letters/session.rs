//! Letter form session: explicit state for one letter form.
//!
//! Transitions consume the current snapshot and return the next one:
//!
//! ```text
//! Idle --submit--> Generating --complete--> Idle (content set)
//!   \--submit (invalid)--> Idle (validation_errors set)
//! Generating --submit--> Busy (unchanged)
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::config::CompanyProfile;
use crate::errors::FieldErrors;
use crate::letters::generator::LetterContent;
use crate::letters::models::LetterRequest;
use crate::letters::prompts::build_prompt;
use crate::letters::validation::validate_letter;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterSession {
    pub form: LetterRequest,
    pub validation_errors: FieldErrors,
    pub is_generating: bool,
    pub content: Option<LetterContent>,
}

/// Outcome of `LetterSession::submit`.
#[derive(Debug)]
pub enum Submission {
    /// Form was valid; the prompt is ready for the text generator.
    Generating {
        session: LetterSession,
        prompt: String,
    },
    /// Form failed validation; errors are on the session.
    Invalid(LetterSession),
    /// A generation is already outstanding; nothing changed.
    Busy(LetterSession),
}

impl LetterSession {
    pub fn new(form: LetterRequest) -> Self {
        Self {
            form,
            validation_errors: FieldErrors::new(),
            is_generating: false,
            content: None,
        }
    }

    /// Replaces the form data. Previously reported errors stay until the next submit.
    pub fn with_form(self, form: LetterRequest) -> Self {
        Self { form, ..self }
    }

    pub fn submit(self, company: &CompanyProfile) -> Submission {
        if self.is_generating {
            return Submission::Busy(self);
        }

        match validate_letter(&self.form) {
            Err(validation_errors) => Submission::Invalid(Self {
                validation_errors,
                ..self
            }),
            Ok(()) => {
                let prompt = build_prompt(company, &self.form);
                Submission::Generating {
                    session: Self {
                        validation_errors: FieldErrors::new(),
                        is_generating: true,
                        content: None,
                        ..self
                    },
                    prompt,
                }
            }
        }
    }

    /// Records the generator's result and clears the busy flag.
    pub fn complete(self, content: LetterContent) -> Self {
        Self {
            is_generating: false,
            content: Some(content),
            ..self
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// In-flight sessions
// ────────────────────────────────────────────────────────────────────────────

/// Sessions with an outstanding generation, keyed by the submitted form.
/// Shared across requests through `AppState`; the lock is never held across
/// an `.await`.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    generating: Mutex<HashMap<String, LetterSession>>,
}

/// Keeps a form marked as generating until dropped, including when the
/// request future is cancelled mid-generation.
#[derive(Debug)]
pub struct InFlight {
    registry: Arc<SessionRegistry>,
    key: String,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.registry.lock().remove(&self.key);
    }
}

impl SessionRegistry {
    /// Submits `form` against the session already tracked for it, if any.
    /// A `Generating` outcome comes with the guard that keeps it tracked.
    pub fn submit(
        self: &Arc<Self>,
        company: &CompanyProfile,
        form: LetterRequest,
    ) -> (Submission, Option<InFlight>) {
        let key = form_key(&form);
        let mut generating = self.lock();

        let session = match generating.get(&key) {
            Some(existing) => existing.clone().with_form(form),
            None => LetterSession::new(form),
        };

        match session.submit(company) {
            Submission::Generating { session, prompt } => {
                generating.insert(key.clone(), session.clone());
                let guard = InFlight {
                    registry: Arc::clone(self),
                    key,
                };
                (Submission::Generating { session, prompt }, Some(guard))
            }
            other => (other, None),
        }
    }

    pub fn is_generating(&self, form: &LetterRequest) -> bool {
        self.lock().contains_key(&form_key(form))
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, LetterSession>> {
        self.generating.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn form_key(form: &LetterRequest) -> String {
    serde_json::to_string(form).unwrap_or_default()
}
