use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::FieldError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Answer {
    #[ts(type = "number")]
    pub id: i64,
    #[ts(type = "number")]
    pub question_id: i64,
    /// Identifier of whoever submitted the answer
    pub user_id: String,
    pub text: String,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /questions/{question_id}/answers/`; the question id comes from the path
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateAnswerRequest {
    pub text: String,
    pub user_id: String,
}

impl CreateAnswerRequest {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.text.is_empty() {
            errors.push(FieldError::new("text", "must not be empty"));
        }
        if self.user_id.is_empty() {
            errors.push(FieldError::new("user_id", "must not be empty"));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
