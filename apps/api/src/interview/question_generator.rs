//! Question Generator — turns parsed résumé / JD facts into interview questions via the LLM.
//!
//! `AppState` holds a `QuestionGenerator` over an `Arc<dyn QuestionModel>`, so the model
//! backend can be swapped (or stubbed in tests) without touching handlers.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::documents::models::{
    EducationEntry, ExperienceEntry, ParsedDocument, ParsedJobDescription,
};
use crate::errors::AppError;
use crate::interview::prompts::{
    BEHAVIORAL_PROMPT_TEMPLATE, COMPETENCY_PROMPT_TEMPLATE, GENERAL_PROMPT_TEMPLATE,
    QUESTION_COUNT, TECHNICAL_PROMPT_TEMPLATE,
};
use crate::llm_client::LlmClient;

const NOT_PROVIDED: &str = "Not provided";
const DEFAULT_STACK: &str = "General technical skills";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Technical,
    Behavioral,
    CompetencyBased,
    General,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Technical => "technical",
            QuestionType::Behavioral => "behavioral",
            QuestionType::CompetencyBased => "competency_based",
            QuestionType::General => "general",
        }
    }

    fn prompt_template(&self) -> &'static str {
        match self {
            QuestionType::Technical => TECHNICAL_PROMPT_TEMPLATE,
            QuestionType::Behavioral => BEHAVIORAL_PROMPT_TEMPLATE,
            QuestionType::CompetencyBased => COMPETENCY_PROMPT_TEMPLATE,
            QuestionType::General => GENERAL_PROMPT_TEMPLATE,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = AppError;

    /// Accepts `Technical`, `behavioral`, `Competency Based`, `competency_based`, `general`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "technical" => Ok(QuestionType::Technical),
            "behavioral" | "behavioural" => Ok(QuestionType::Behavioral),
            "competency_based" | "competency" => Ok(QuestionType::CompetencyBased),
            "general" => Ok(QuestionType::General),
            _ => Err(AppError::Validation(format!("Unknown question type: {s}"))),
        }
    }
}

/// Text blocks substituted into a prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionContext {
    pub cv_context: String,
    pub jd_context: String,
    pub technical_stack: String,
}

/// The question model trait. Implement this to swap LLM backends.
#[async_trait]
pub trait QuestionModel: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

/// Default backend: Gemini through the shared `LlmClient`.
pub struct GeminiQuestionModel(pub LlmClient);

#[async_trait]
impl QuestionModel for GeminiQuestionModel {
    async fn complete(&self, prompt: &str) -> Result<String, AppError> {
        self.0
            .generate_text(prompt)
            .await
            .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))
    }
}

#[derive(Clone)]
pub struct QuestionGenerator {
    model: Arc<dyn QuestionModel>,
}

impl QuestionGenerator {
    pub fn new(model: Arc<dyn QuestionModel>) -> Self {
        Self { model }
    }

    /// Generates exactly `QUESTION_COUNT` questions. Missing ones are padded with
    /// placeholders; model errors are returned to the caller.
    pub async fn generate_questions(
        &self,
        question_type: QuestionType,
        resume: Option<&ParsedDocument>,
        job_description: Option<&ParsedJobDescription>,
        technical_stack: Option<&[String]>,
    ) -> Result<Vec<String>, AppError> {
        let context = prepare_context(resume, job_description, technical_stack);
        let prompt = build_prompt(question_type, &context);

        let response = self.model.complete(&prompt).await?;
        let mut questions = parse_questions(&response);
        debug!(
            "Model returned {} {} questions",
            questions.len(),
            question_type
        );

        if questions.len() < QUESTION_COUNT {
            warn!(
                "Only {} of {QUESTION_COUNT} {question_type} questions generated; padding with defaults",
                questions.len()
            );
        }
        while questions.len() < QUESTION_COUNT {
            questions.push(format!(
                "Default {question_type} question #{}",
                questions.len() + 1
            ));
        }

        Ok(questions)
    }
}

pub fn prepare_context(
    resume: Option<&ParsedDocument>,
    job_description: Option<&ParsedJobDescription>,
    technical_stack: Option<&[String]>,
) -> QuestionContext {
    let cv_context = resume
        .map(|cv| {
            [
                format!("Skills: {}", cv.skills.join(", ")),
                format!(
                    "Experience: {}",
                    join_described(&cv.experience, describe_experience)
                ),
                format!(
                    "Education: {}",
                    join_described(&cv.education, describe_education)
                ),
            ]
            .join(". ")
        })
        .unwrap_or_else(|| NOT_PROVIDED.to_string());

    let jd_context = job_description
        .map(|jd| {
            let mut parts = Vec::new();
            if !jd.role.is_empty() {
                parts.push(format!("Role: {}", jd.role));
            }
            parts.push(format!("Requirements: {}", jd.requirements.join(", ")));
            parts.push(format!(
                "Responsibilities: {}",
                jd.responsibilities.join(", ")
            ));
            parts.join(". ")
        })
        .unwrap_or_else(|| NOT_PROVIDED.to_string());

    let technical_stack = match technical_stack {
        Some(stack) if !stack.is_empty() => stack.join(", "),
        _ => DEFAULT_STACK.to_string(),
    };

    QuestionContext {
        cv_context,
        jd_context,
        technical_stack,
    }
}

fn join_described<T>(items: &[T], describe: fn(&T) -> String) -> String {
    items
        .iter()
        .map(describe)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

fn describe_experience(e: &ExperienceEntry) -> String {
    let mut text = match (e.position.is_empty(), e.company.is_empty()) {
        (false, false) => format!("{} at {}", e.position, e.company),
        (true, false) => e.company.clone(),
        (false, true) => e.position.clone(),
        (true, true) => String::new(),
    };
    if !text.is_empty() && !e.dates.is_empty() {
        text.push_str(&format!(" ({})", e.dates));
    }
    text
}

fn describe_education(e: &EducationEntry) -> String {
    let mut text = [e.degree.as_str(), e.institution.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if !text.is_empty() && !e.year.is_empty() {
        text.push_str(&format!(" ({})", e.year));
    }
    text
}

pub fn build_prompt(question_type: QuestionType, context: &QuestionContext) -> String {
    question_type
        .prompt_template()
        .replace("{technical_stack}", &context.technical_stack)
        .replace("{cv_context}", &context.cv_context)
        .replace("{jd_context}", &context.jd_context)
}

/// Keeps numbered lines `1.`–`5.` (or `1)`), stripping the number. At most `QUESTION_COUNT`.
pub fn parse_questions(response: &str) -> Vec<String> {
    response
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with(['1', '2', '3', '4', '5']))
        .map(|line| {
            line.split_once(['.', ')'])
                .map(|(_, rest)| rest.trim())
                .unwrap_or(line)
        })
        .filter(|q| !q.is_empty())
        .take(QUESTION_COUNT)
        .map(String::from)
        .collect()
}
