// Prompt builders for the hiring operations.
// Each prompt is sent as the single user-role message of a chat completion.

use crate::hiring::models::{
    EvaluationRequest, FeedbackSpec, JobSpec, QuestionSpec, ResumeScreeningRequest,
};

/// Number of questions requested from the question generator.
pub const SCREENING_QUESTION_COUNT: usize = 5;

/// What the screening report must contain, appended after the job and resume.
pub const SCREENING_INSTRUCTIONS: &str = "Provide:\n\
    - Fit score out of 100\n\
    - 3 strengths\n\
    - 3 areas for improvement\n\
    - Any missing keywords or skills";

pub const EVALUATION_INSTRUCTIONS: &str =
    "Score each answer from 1 to 10 and explain your evaluation.";

pub const FEEDBACK_INSTRUCTIONS: &str = "Include one sentence of general positive feedback.";

pub fn job_description_prompt(spec: &JobSpec) -> String {
    let mut prompt = format!(
        "Write a detailed job description for a {} {} role. Key skills: {}. Location: {}.",
        spec.seniority,
        spec.title,
        spec.skills.join(", "),
        spec.location,
    );
    if let Some(description) = &spec.description {
        let description = description.trim_end_matches('.');
        prompt.push_str(&format!(" Additional context: {description}."));
    }
    prompt
}

pub fn resume_screening_prompt(request: &ResumeScreeningRequest) -> String {
    format!(
        "You are an AI hiring assistant. Evaluate the following resume for the job below.\n\n\
         Job Description:\n{}\n\n\
         Resume:\n{}\n\n\
         {SCREENING_INSTRUCTIONS}",
        request.job_description, request.resume_text,
    )
}

pub fn screening_questions_prompt(spec: &QuestionSpec) -> String {
    format!(
        "Generate {SCREENING_QUESTION_COUNT} screening questions for a {} position \
         that requires these skills: {}.",
        spec.title,
        spec.skills.join(", "),
    )
}

pub fn answer_evaluation_prompt(request: &EvaluationRequest) -> String {
    format!(
        "You are an AI interviewer. Here are some screening questions and a candidate's answers.\n\n\
         Questions:\n{}\n\n\
         Answers:\n{}\n\n\
         {EVALUATION_INSTRUCTIONS}",
        request.questions, request.answers,
    )
}

pub fn feedback_email_prompt(spec: &FeedbackSpec) -> String {
    format!(
        "Write a one-paragraph {} {} email to {} for the position of {}. {FEEDBACK_INSTRUCTIONS}",
        spec.tone,
        spec.outcome.status_phrase(),
        spec.candidate_name,
        spec.job_title,
    )
}
