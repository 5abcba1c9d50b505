//! Input validation for the five hiring operations.
//!
//! Every rule runs before any external call. Each validator consumes the raw
//! payload and returns the validated shape or the first rule it violates.

use bytes::Bytes;
use serde_json::Value;

use crate::errors::ValidationError;
use crate::hiring::models::{
    EvaluationPayload, EvaluationRequest, FeedbackPayload, FeedbackSpec, JobSpec, JobSpecPayload,
    Outcome, QuestionSpec, QuestionSpecPayload, ResumeScreeningRequest, ScreeningUpload, Tone,
};

pub const JOB_FIELDS_REQUIRED: &str = "Title and skills are required";
pub const SENIORITY_REQUIRED: &str = "Seniority is required";
pub const SKILLS_NOT_STRINGS: &str = "Skills must be a list of strings";
pub const SCREENING_FIELDS_REQUIRED: &str = "Missing required fields";
pub const QUESTION_FIELDS_REQUIRED: &str = "Title and skills are required";
pub const EVALUATION_FIELDS_REQUIRED: &str = "Questions and answers are required";
pub const FEEDBACK_FIELDS_REQUIRED: &str =
    "Candidate name, job title, and outcome are required";

pub const DEFAULT_LOCATION: &str = "remote";

pub fn validate_job_spec(payload: JobSpecPayload) -> Result<JobSpec, ValidationError> {
    let missing = ValidationError::InvalidInput(JOB_FIELDS_REQUIRED);

    let title = non_blank(payload.title).ok_or(missing.clone())?;
    let skills = payload.skills.filter(is_truthy).ok_or(missing)?;

    let location = payload
        .location
        .filter(|location| !location.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    let seniority = non_blank(payload.seniority)
        .ok_or(ValidationError::InvalidInput(SENIORITY_REQUIRED))?;

    let skills =
        string_list(&skills).ok_or(ValidationError::InvalidInput(SKILLS_NOT_STRINGS))?;

    Ok(JobSpec {
        title,
        seniority,
        skills,
        location,
        description: non_blank(payload.description),
    })
}

/// Checks the multipart fields are there. Returns the job description and
/// the resume bytes to hand to the extractor.
pub fn validate_screening_upload(
    upload: ScreeningUpload,
) -> Result<(String, Bytes), ValidationError> {
    let job_description = upload.job_description.filter(|jd| !jd.is_empty());
    match (job_description, upload.resume) {
        (Some(job_description), Some(resume)) => Ok((job_description, resume)),
        _ => Err(ValidationError::MissingFields(SCREENING_FIELDS_REQUIRED)),
    }
}

/// Runs once the resume text has been extracted. Resume text is checked first.
pub fn validate_screening_request(
    job_description: String,
    resume_text: String,
) -> Result<ResumeScreeningRequest, ValidationError> {
    if resume_text.trim().is_empty() {
        return Err(ValidationError::EmptyResumeText);
    }
    if job_description.trim().is_empty() {
        return Err(ValidationError::EmptyJobDescription);
    }

    Ok(ResumeScreeningRequest {
        job_description: job_description.trim().to_string(),
        resume_text: resume_text.trim().to_string(),
    })
}

pub fn validate_question_spec(
    payload: QuestionSpecPayload,
) -> Result<QuestionSpec, ValidationError> {
    let missing = ValidationError::MissingFields(QUESTION_FIELDS_REQUIRED);

    let title = non_blank(payload.title).ok_or(missing.clone())?;
    // An empty list is its own error; other falsy values are missing.
    let skills = payload
        .skills
        .filter(|skills| skills.is_array() || is_truthy(skills))
        .ok_or(missing)?;

    let skills = string_list(&skills).ok_or(ValidationError::InvalidSkillsType)?;
    if skills.is_empty() {
        return Err(ValidationError::EmptySkills);
    }

    Ok(QuestionSpec { title, skills })
}

pub fn validate_evaluation(
    payload: EvaluationPayload,
) -> Result<EvaluationRequest, ValidationError> {
    match (non_blank(payload.questions), non_blank(payload.answers)) {
        (Some(questions), Some(answers)) => Ok(EvaluationRequest { questions, answers }),
        _ => Err(ValidationError::MissingFields(EVALUATION_FIELDS_REQUIRED)),
    }
}

pub fn validate_feedback(payload: FeedbackPayload) -> Result<FeedbackSpec, ValidationError> {
    let missing = ValidationError::MissingFields(FEEDBACK_FIELDS_REQUIRED);

    let candidate_name = non_blank(payload.candidate_name).ok_or(missing.clone())?;
    let job_title = non_blank(payload.job_title).ok_or(missing.clone())?;
    let outcome = payload.outcome.filter(is_truthy).ok_or(missing)?;

    let outcome = outcome
        .as_str()
        .ok_or(ValidationError::InvalidOutcome)?
        .parse::<Outcome>()?;

    // Default only when the key is absent; a present value must be valid.
    let tone = match payload.tone {
        None => Tone::default(),
        Some(value) => value
            .as_str()
            .ok_or(ValidationError::InvalidTone)?
            .parse::<Tone>()?,
    };

    Ok(FeedbackSpec {
        candidate_name,
        job_title,
        outcome,
        tone,
    })
}

/// Trimmed value, or `None` when absent or blank.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// JSON truthiness: null, false, 0, "", [] and {} are all "missing".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// `Some` only for an array whose every element is a string.
fn string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|item| item.as_str().map(String::from))
        .collect()
}
