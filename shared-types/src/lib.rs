use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod answer;
pub mod question;

pub use answer::{Answer, CreateAnswerRequest};
pub use question::{CreateQuestionRequest, Question, QuestionWithAnswers, QUESTION_TEXT_MIN_LEN};

// Shared models for the qna API and its clients

/// A single rejected field in a request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthResponse {
    pub msg: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            msg: "healthy".to_string(),
        }
    }
}
