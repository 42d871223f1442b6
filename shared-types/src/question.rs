use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{Answer, FieldError};

/// Minimum number of characters in a question's text
pub const QUESTION_TEXT_MIN_LEN: usize = 3;

/// Question as listed, without its answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    #[ts(type = "number")]
    pub id: i64,
    pub text: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// Question together with every answer that references it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionWithAnswers {
    #[ts(type = "number")]
    pub id: i64,
    pub text: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateQuestionRequest {
    pub text: String,
}

impl CreateQuestionRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        if self.text.chars().count() < QUESTION_TEXT_MIN_LEN {
            return Err(vec![FieldError::new(
                "text",
                format!("must be at least {QUESTION_TEXT_MIN_LEN} characters long"),
            )]);
        }
        Ok(())
    }
}
