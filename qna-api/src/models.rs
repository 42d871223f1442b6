use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row of the `questions` table
#[derive(Debug, Clone, FromRow)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Row of the `answers` table
#[derive(Debug, Clone, FromRow)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A question with its answers loaded eagerly
#[derive(Debug, Clone)]
pub struct QuestionWithAnswers {
    pub question: Question,
    pub answers: Vec<Answer>,
}

impl From<Question> for shared_types::Question {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            text: question.text,
            created_at: question.created_at,
        }
    }
}

impl From<Answer> for shared_types::Answer {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id,
            question_id: answer.question_id,
            user_id: answer.user_id,
            text: answer.text,
            created_at: answer.created_at,
        }
    }
}

impl From<QuestionWithAnswers> for shared_types::QuestionWithAnswers {
    fn from(loaded: QuestionWithAnswers) -> Self {
        Self {
            id: loaded.question.id,
            text: loaded.question.text,
            created_at: loaded.question.created_at,
            answers: loaded.answers.into_iter().map(Into::into).collect(),
        }
    }
}
