use crate::config::Config;
use crate::interview::question_generator::QuestionGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Question generation over a pluggable model backend. Default: Gemini.
    pub questions: QuestionGenerator,
}
