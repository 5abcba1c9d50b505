//! Axum route handlers for the hiring API.

use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        rejection::JsonRejection,
        State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::errors::{AppError, ValidationError};
use crate::hiring::models::{
    EvaluationPayload, EvaluationResponse, FeedbackEmailResponse, FeedbackPayload,
    JobDescriptionResponse, JobSpecPayload, QuestionSpecPayload, QuestionsResponse,
    ScreeningResponse, ScreeningUpload,
};
use crate::hiring::service;
use crate::hiring::validation::{
    EVALUATION_FIELDS_REQUIRED, FEEDBACK_FIELDS_REQUIRED, JOB_FIELDS_REQUIRED,
    QUESTION_FIELDS_REQUIRED, SCREENING_FIELDS_REQUIRED,
};
use crate::state::AppState;

/// POST /generate-jd
pub async fn handle_generate_jd(
    State(state): State<AppState>,
    payload: Result<Json<JobSpecPayload>, JsonRejection>,
) -> Result<Json<JobDescriptionResponse>, AppError> {
    let payload = json_body(payload, ValidationError::InvalidInput(JOB_FIELDS_REQUIRED))?;
    let job_description = service::generate_job_description(state.llm.as_ref(), payload).await?;

    Ok(Json(JobDescriptionResponse { job_description }))
}

/// POST /screen-resume
///
/// multipart/form-data with a `job_description` text field and a `resume` PDF file.
pub async fn handle_screen_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ScreeningResponse>, AppError> {
    let upload = read_screening_upload(multipart).await?;
    let screening_result =
        service::screen_resume(state.llm.as_ref(), state.extractor.as_ref(), upload).await?;

    Ok(Json(ScreeningResponse { screening_result }))
}

/// POST /generate-questions
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<QuestionSpecPayload>, JsonRejection>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let payload = json_body(payload, ValidationError::MissingFields(QUESTION_FIELDS_REQUIRED))?;
    let questions = service::generate_screening_questions(state.llm.as_ref(), payload).await?;

    Ok(Json(QuestionsResponse { questions }))
}

/// POST /evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluationPayload>, JsonRejection>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let payload = json_body(payload, ValidationError::MissingFields(EVALUATION_FIELDS_REQUIRED))?;
    let evaluation = service::evaluate_candidate_answers(state.llm.as_ref(), payload).await?;

    Ok(Json(EvaluationResponse { evaluation }))
}

/// POST /generate-feedback
pub async fn handle_generate_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackPayload>, JsonRejection>,
) -> Result<Json<FeedbackEmailResponse>, AppError> {
    let payload = json_body(payload, ValidationError::MissingFields(FEEDBACK_FIELDS_REQUIRED))?;
    let email = service::generate_feedback_email(state.llm.as_ref(), payload).await?;

    Ok(Json(FeedbackEmailResponse { email }))
}

/// A body that is absent, not JSON, or mistyped counts as missing fields.
fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    missing: ValidationError,
) -> Result<T, AppError> {
    match payload {
        Ok(Json(payload)) => Ok(payload),
        Err(rejection) => {
            debug!("Rejected JSON body: {}", rejection.body_text());
            Err(missing.into())
        }
    }
}

/// Collects the `job_description` text field and the `resume` file part.
/// A `resume` part without a filename is a plain form field, not an upload,
/// and is ignored like any other unknown field.
async fn read_screening_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ScreeningUpload, AppError> {
    let mut multipart = multipart.map_err(|rejection| {
        debug!("Rejected multipart body: {}", rejection.body_text());
        missing_upload_fields()
    })?;

    let mut upload = ScreeningUpload::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        let is_file = field.file_name().is_some_and(|name| !name.is_empty());
        match name.as_deref() {
            Some("job_description") => {
                upload.job_description = Some(field.text().await.map_err(multipart_error)?);
            }
            Some("resume") if is_file => {
                upload.resume = Some(field.bytes().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    Ok(upload)
}

fn missing_upload_fields() -> AppError {
    ValidationError::MissingFields(SCREENING_FIELDS_REQUIRED).into()
}

/// Body-limit overruns keep their 413; any other multipart failure is a malformed upload.
fn multipart_error(error: MultipartError) -> AppError {
    debug!("Malformed multipart body: {error}");
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        missing_upload_fields()
    }
}
