//! The five hiring operations: validate → build prompt → generate → trim.
//!
//! Collaborators are passed in explicitly so callers (and tests) decide which
//! generator and extractor are used. All validation finishes before the first
//! external call.

use tracing::{debug, info};

use crate::errors::{AppError, Operation};
use crate::hiring::models::{
    EvaluationPayload, FeedbackPayload, JobSpecPayload, QuestionSpecPayload, ScreeningUpload,
};
use crate::hiring::prompts::{
    answer_evaluation_prompt, feedback_email_prompt, job_description_prompt,
    resume_screening_prompt, screening_questions_prompt,
};
use crate::hiring::validation::{
    validate_evaluation, validate_feedback, validate_job_spec, validate_question_spec,
    validate_screening_request, validate_screening_upload,
};
use crate::llm_client::TextGenerator;
use crate::resume_parser::ResumeExtractor;

pub async fn generate_job_description(
    llm: &dyn TextGenerator,
    payload: JobSpecPayload,
) -> Result<String, AppError> {
    let spec = validate_job_spec(payload)?;
    info!(
        "Generating job description: title={}, location={}",
        spec.title, spec.location
    );

    run(llm, Operation::JobDescription, job_description_prompt(&spec)).await
}

pub async fn screen_resume(
    llm: &dyn TextGenerator,
    extractor: &dyn ResumeExtractor,
    upload: ScreeningUpload,
) -> Result<String, AppError> {
    let (job_description, resume) = validate_screening_upload(upload)?;
    info!("Screening resume upload ({} bytes)", resume.len());

    let resume_text = extractor.extract_text(resume).await?;
    let request = validate_screening_request(job_description, resume_text)?;

    run(llm, Operation::ResumeScreening, resume_screening_prompt(&request)).await
}

pub async fn generate_screening_questions(
    llm: &dyn TextGenerator,
    payload: QuestionSpecPayload,
) -> Result<String, AppError> {
    let spec = validate_question_spec(payload)?;
    info!(
        "Generating screening questions: title={}, skills={}",
        spec.title,
        spec.skills.len()
    );

    run(llm, Operation::ScreeningQuestions, screening_questions_prompt(&spec)).await
}

pub async fn evaluate_candidate_answers(
    llm: &dyn TextGenerator,
    payload: EvaluationPayload,
) -> Result<String, AppError> {
    let request = validate_evaluation(payload)?;
    info!("Evaluating candidate answers");

    run(llm, Operation::AnswerEvaluation, answer_evaluation_prompt(&request)).await
}

pub async fn generate_feedback_email(
    llm: &dyn TextGenerator,
    payload: FeedbackPayload,
) -> Result<String, AppError> {
    let spec = validate_feedback(payload)?;
    info!(
        "Generating {} feedback email: tone={}",
        spec.outcome.status_phrase(),
        spec.tone
    );

    run(llm, Operation::FeedbackEmail, feedback_email_prompt(&spec)).await
}

/// Single generator call; the text comes back trimmed, failures are tagged with the operation.
async fn run(
    llm: &dyn TextGenerator,
    operation: Operation,
    prompt: String,
) -> Result<String, AppError> {
    debug!("Prompt for {operation}: {} chars", prompt.len());

    let text = llm
        .generate(&prompt)
        .await
        .map_err(AppError::generation(operation))?;

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use serde_json::json;

    use crate::errors::ValidationError;
    use crate::testing::{FailingGenerator, StubExtractor, StubGenerator};

    fn jd_payload() -> JobSpecPayload {
        serde_json::from_value(json!({
            "title": "Backend Engineer",
            "seniority": "Senior",
            "skills": ["Python", "Flask"]
        }))
        .unwrap()
    }

    fn upload(job_description: &str) -> ScreeningUpload {
        ScreeningUpload {
            job_description: Some(job_description.to_string()),
            resume: Some(Bytes::from_static(b"%PDF-1.4 mock pdf bytes")),
        }
    }

    #[tokio::test]
    async fn test_job_description_trims_and_forwards_prompt() {
        let llm = StubGenerator::new("  Generated JD \n");
        let text = generate_job_description(&llm, jd_payload()).await.unwrap();

        assert_eq!(text, "Generated JD");
        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Senior Backend Engineer role"));
        assert!(prompts[0].contains("Key skills: Python, Flask."));
        assert!(prompts[0].contains("Location: remote."));
    }

    #[tokio::test]
    async fn test_validation_failure_skips_generator() {
        let llm = StubGenerator::new("unused");
        let payload = JobSpecPayload {
            title: Some("Dev".to_string()),
            ..Default::default()
        };

        let err = generate_job_description(&llm, payload).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::InvalidInput(_))
        ));
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_generator_failure_is_classified() {
        let err = generate_job_description(&FailingGenerator, jd_payload())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Generation {
                operation: Operation::JobDescription,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_operations_are_idempotent_with_deterministic_generator() {
        let llm = StubGenerator::new(" same text ");
        let first = generate_screening_questions(
            &llm,
            serde_json::from_value(json!({"title": "Dev", "skills": ["Rust"]})).unwrap(),
        )
        .await
        .unwrap();
        let second = generate_screening_questions(
            &llm,
            serde_json::from_value(json!({"title": "Dev", "skills": ["Rust"]})).unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(first, "same text");
        assert_eq!(first, second);
        let prompts = llm.prompts();
        assert_eq!(prompts[0], prompts[1]);
    }

    #[tokio::test]
    async fn test_screen_resume_embeds_extracted_text() {
        let llm = StubGenerator::new("Screened!");
        let extractor = StubExtractor::text("Resume text here");

        let text = screen_resume(&llm, &extractor, upload("Python Developer needed."))
            .await
            .unwrap();

        assert_eq!(text, "Screened!");
        let prompts = llm.prompts();
        assert!(prompts[0].contains("Job Description:\nPython Developer needed."));
        assert!(prompts[0].contains("Resume:\nResume text here"));
    }

    #[tokio::test]
    async fn test_screen_resume_extraction_failure() {
        let llm = StubGenerator::new("unused");
        let err = screen_resume(&llm, &StubExtractor::failing(), upload("Rust dev"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Extraction(_)));
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_screen_resume_empty_text_and_blank_job_description() {
        let llm = StubGenerator::new("unused");

        let err = screen_resume(&llm, &StubExtractor::text("  \n "), upload("Rust dev"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::EmptyResumeText)
        ));

        let err = screen_resume(&llm, &StubExtractor::text("Jane Doe"), upload("   "))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::EmptyJobDescription)
        ));
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_screen_resume_missing_upload_skips_extractor() {
        let llm = StubGenerator::new("unused");
        let extractor = StubExtractor::text("Jane Doe");

        let err = screen_resume(&llm, &extractor, ScreeningUpload::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(ValidationError::MissingFields(_))
        ));
        assert_eq!(extractor.calls(), 0);
    }

    #[tokio::test]
    async fn test_evaluate_candidate_answers() {
        let llm = StubGenerator::new("Eval result!");
        let text = evaluate_candidate_answers(
            &llm,
            EvaluationPayload {
                questions: Some("Q".to_string()),
                answers: Some("A".to_string()),
            },
        )
        .await
        .unwrap();

        assert_eq!(text, "Eval result!");
        assert!(llm.prompts()[0].contains("Questions:\nQ\n\nAnswers:\nA"));
    }

    #[tokio::test]
    async fn test_feedback_email_uses_trimmed_name() {
        let llm = StubGenerator::new("Dear Jane...");
        let payload: FeedbackPayload = serde_json::from_value(json!({
            "candidate_name": "  Jane Smith  ",
            "job_title": "Data Scientist",
            "outcome": "accepted"
        }))
        .unwrap();

        generate_feedback_email(&llm, payload).await.unwrap();
        assert!(llm.prompts()[0]
            .contains("professional acceptance email to Jane Smith for the position of Data Scientist"));
    }

    #[tokio::test]
    async fn test_feedback_generator_failure() {
        let payload: FeedbackPayload = serde_json::from_value(json!({
            "candidate_name": "Jane",
            "job_title": "Dev",
            "outcome": "rejected",
            "tone": "formal"
        }))
        .unwrap();

        let err = generate_feedback_email(&FailingGenerator, payload)
            .await
            .unwrap_err();
        assert_eq!(err.public_message(), "Failed to generate feedback email");
    }
}
