//! Axum route handlers for interview question generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::documents::models::{ParsedDocument, ParsedJobDescription};
use crate::errors::AppError;
use crate::interview::question_generator::QuestionType;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateQuestionsRequest {
    pub question_type: String,
    #[serde(default)]
    pub resume: Option<ParsedDocument>,
    #[serde(default)]
    pub job_description: Option<ParsedJobDescription>,
    #[serde(default)]
    pub technical_stack: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuestionsResponse {
    pub question_type: QuestionType,
    pub questions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interview/questions
///
/// Always returns exactly five questions for the requested type.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuestionsRequest>,
) -> Result<Json<GenerateQuestionsResponse>, AppError> {
    let question_type: QuestionType = request.question_type.parse()?;
    info!("Generating {question_type} interview questions");

    let questions = state
        .questions
        .generate_questions(
            question_type,
            request.resume.as_ref(),
            request.job_description.as_ref(),
            request.technical_stack.as_deref(),
        )
        .await?;

    Ok(Json(GenerateQuestionsResponse {
        question_type,
        questions,
    }))
}
