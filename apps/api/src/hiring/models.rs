use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::ValidationError;

// ────────────────────────────────────────────────────────────────────────────
// Request payloads (as received; loosely typed so validation can classify)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct JobSpecPayload {
    pub title: Option<String>,
    pub seniority: Option<String>,
    pub skills: Option<Value>,
    pub location: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuestionSpecPayload {
    pub title: Option<String>,
    pub skills: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EvaluationPayload {
    pub questions: Option<String>,
    pub answers: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeedbackPayload {
    pub candidate_name: Option<String>,
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub outcome: Option<Value>,
    /// `None` only when the key is absent; an explicit `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    pub tone: Option<Value>,
}

/// Multipart fields collected from `/screen-resume`.
#[derive(Debug, Default)]
pub struct ScreeningUpload {
    pub job_description: Option<String>,
    pub resume: Option<Bytes>,
}

/// Marks a key as present whatever its value, so `null` is not confused with absence.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

// ────────────────────────────────────────────────────────────────────────────
// Validated inputs
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub title: String,
    pub seniority: String,
    pub skills: Vec<String>,
    pub location: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeScreeningRequest {
    pub job_description: String,
    pub resume_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSpec {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRequest {
    pub questions: String,
    pub answers: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSpec {
    pub candidate_name: String,
    pub job_title: String,
    pub outcome: Outcome,
    pub tone: Tone,
}

/// Hiring decision communicated in a feedback email.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}

impl Outcome {
    /// Status phrase used inside the email prompt.
    pub fn status_phrase(self) -> &'static str {
        match self {
            Outcome::Accepted => "acceptance",
            Outcome::Rejected => "rejection",
        }
    }
}

impl FromStr for Outcome {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Outcome::Accepted),
            "rejected" => Ok(Outcome::Rejected),
            _ => Err(ValidationError::InvalidOutcome),
        }
    }
}

/// Stylistic register of a generated email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    #[default]
    Professional,
    Friendly,
    Formal,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
        }
    }
}

impl FromStr for Tone {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(Tone::Professional),
            "friendly" => Ok(Tone::Friendly),
            "formal" => Ok(Tone::Formal),
            _ => Err(ValidationError::InvalidTone),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response bodies
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct JobDescriptionResponse {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub screening_result: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub evaluation: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackEmailResponse {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feedback_payload_distinguishes_absent_and_null_tone() {
        let absent: FeedbackPayload = serde_json::from_value(json!({"outcome": "accepted"})).unwrap();
        assert!(absent.tone.is_none());

        let null: FeedbackPayload =
            serde_json::from_value(json!({"outcome": "accepted", "tone": null})).unwrap();
        assert_eq!(null.tone, Some(Value::Null));
    }

    #[test]
    fn test_outcome_parsing_is_exact() {
        assert_eq!("accepted".parse::<Outcome>(), Ok(Outcome::Accepted));
        assert_eq!("rejected".parse::<Outcome>(), Ok(Outcome::Rejected));
        assert_eq!(
            "Accepted".parse::<Outcome>(),
            Err(ValidationError::InvalidOutcome)
        );
        assert_eq!(
            "pending".parse::<Outcome>(),
            Err(ValidationError::InvalidOutcome)
        );
    }

    #[test]
    fn test_outcome_status_phrase() {
        assert_eq!(Outcome::Accepted.status_phrase(), "acceptance");
        assert_eq!(Outcome::Rejected.status_phrase(), "rejection");
    }

    #[test]
    fn test_tone_parsing_and_default() {
        assert_eq!(Tone::default(), Tone::Professional);
        assert_eq!("friendly".parse::<Tone>(), Ok(Tone::Friendly));
        assert_eq!("formal".parse::<Tone>(), Ok(Tone::Formal));
        assert_eq!("casual".parse::<Tone>(), Err(ValidationError::InvalidTone));
        assert_eq!(Tone::Formal.to_string(), "formal");
    }
}
