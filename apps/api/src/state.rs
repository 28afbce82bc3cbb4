use std::sync::Arc;

use crate::config::CompanyProfile;
use crate::letters::session::SessionRegistry;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text generator. Default: GeminiClient, built once at startup.
    pub generator: Arc<dyn TextGenerator>,
    /// Issuing company, printed on letters and salary slips.
    pub company: CompanyProfile,
    /// Letter forms with a generation in progress.
    pub letter_sessions: Arc<SessionRegistry>,
}
