use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::resume_parser::ExtractionError;

/// The five hiring operations. Used to pick the generic failure message
/// when the text generator fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    JobDescription,
    ResumeScreening,
    ScreeningQuestions,
    AnswerEvaluation,
    FeedbackEmail,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::JobDescription => "Failed to generate job description",
            Operation::ResumeScreening => "Failed to screen resume",
            Operation::ScreeningQuestions => "Failed to generate screening questions",
            Operation::AnswerEvaluation => "Failed to evaluate candidate answers",
            Operation::FeedbackEmail => "Failed to generate feedback email",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::JobDescription => "job description generation",
            Operation::ResumeScreening => "resume screening",
            Operation::ScreeningQuestions => "screening question generation",
            Operation::AnswerEvaluation => "answer evaluation",
            Operation::FeedbackEmail => "feedback email generation",
        };
        f.write_str(name)
    }
}

/// Client-side input problems. The message is returned to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidInput(&'static str),

    #[error("{0}")]
    MissingFields(&'static str),

    #[error("Skills must be a list of strings")]
    InvalidSkillsType,

    #[error("At least one skill is required")]
    EmptySkills,

    #[error("Resume text is empty")]
    EmptyResumeText,

    #[error("Job description is empty")]
    EmptyJobDescription,

    #[error("Outcome must be 'accepted' or 'rejected'")]
    InvalidOutcome,

    #[error("Tone must be 'professional', 'friendly', or 'formal'")]
    InvalidTone,
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Upload exceeds the configured size limit")]
    PayloadTooLarge,

    #[error("Resume extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("LLM error during {operation}: {source}")]
    Generation {
        operation: Operation,
        #[source]
        source: LlmError,
    },
}

impl AppError {
    pub fn generation(operation: Operation) -> impl FnOnce(LlmError) -> AppError {
        move |source| AppError::Generation { operation, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Extraction(_) | AppError::Generation { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message shown to the caller. Upstream causes are never included.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(e) => e.to_string(),
            AppError::PayloadTooLarge => "Resume file is too large".to_string(),
            AppError::Extraction(_) => "Failed to extract resume text".to_string(),
            AppError::Generation { operation, .. } => operation.failure_message().to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(e) => tracing::debug!("Rejected request: {e}"),
            AppError::PayloadTooLarge => tracing::debug!("Rejected request: {self}"),
            AppError::Extraction(e) => tracing::error!("Resume extraction error: {e}"),
            AppError::Generation { operation, source } => {
                tracing::error!("LLM error during {operation}: {source}")
            }
        }

        let body = Json(json!({ "error": self.public_message() }));

        (self.status(), body).into_response()
    }
}
