use super::QUESTION_NOT_FOUND;
use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::repositories::QuestionRepository;
use shared_types::{CreateQuestionRequest, Question, QuestionWithAnswers};
use tracing::{debug, info, warn};

pub struct QuestionService {
    database: Database,
}

impl QuestionService {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Persists a question. The request must already have passed `validate()`.
    pub async fn create_question(&self, request: CreateQuestionRequest) -> AppResult<Question> {
        info!("Creating question text={}", request.text);

        let mut conn = self.database.acquire().await?;
        let question = QuestionRepository::new(&mut conn)
            .create(&request.text)
            .await?;

        info!("Question {} created successfully", question.id);
        Ok(question.into())
    }

    pub async fn get_question(&self, question_id: i64) -> AppResult<QuestionWithAnswers> {
        let mut conn = self.database.acquire().await?;
        let question = QuestionRepository::new(&mut conn).get(question_id).await?;

        match question {
            Some(question) => Ok(question.into()),
            None => {
                debug!("Question {} not found", question_id);
                Err(AppError::NotFound(QUESTION_NOT_FOUND.to_string()))
            }
        }
    }

    pub async fn list_questions(&self) -> AppResult<Vec<Question>> {
        let mut conn = self.database.acquire().await?;
        let questions = QuestionRepository::new(&mut conn).list().await?;
        Ok(questions.into_iter().map(Into::into).collect())
    }

    /// Deletes the question and its answers. Deleting an unknown id succeeds.
    pub async fn delete_question(&self, question_id: i64) -> AppResult<()> {
        warn!("Deleting question, question_id={}", question_id);

        let mut conn = self.database.acquire().await?;
        let removed = QuestionRepository::new(&mut conn)
            .delete(question_id)
            .await?;

        if removed == 0 {
            debug!("Question {} did not exist, nothing deleted", question_id);
        }
        info!("Question deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::AnswerService;
    use crate::test_support::test_database;
    use shared_types::CreateAnswerRequest;

    fn question(text: &str) -> CreateQuestionRequest {
        CreateQuestionRequest {
            text: text.to_string(),
        }
    }

    #[actix_rt::test]
    async fn test_create_and_list_questions() {
        let (_dir, db) = test_database().await;
        let service = QuestionService::new(db);

        let created = service.create_question(question("What is Python?")).await.unwrap();
        assert_eq!(created.text, "What is Python?");

        let listed = service.list_questions().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[actix_rt::test]
    async fn test_get_question_not_found() {
        let (_dir, db) = test_database().await;
        let service = QuestionService::new(db);

        let err = service.get_question(999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Question not found"));
    }

    #[actix_rt::test]
    async fn test_get_question_includes_only_its_answers() {
        let (_dir, db) = test_database().await;
        let questions = QuestionService::new(db.clone());
        let answers = AnswerService::new(db);

        let target = questions.create_question(question("Target question")).await.unwrap();
        let other = questions.create_question(question("Other question")).await.unwrap();

        for (question_id, text) in [(target.id, "one"), (other.id, "noise"), (target.id, "two")] {
            answers
                .create_answer(
                    question_id,
                    CreateAnswerRequest {
                        text: text.to_string(),
                        user_id: "u1".to_string(),
                    },
                )
                .await
                .unwrap();
        }

        let loaded = questions.get_question(target.id).await.unwrap();
        assert_eq!(loaded.id, target.id);
        assert_eq!(loaded.created_at, target.created_at);
        let texts: Vec<&str> = loaded.answers.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[actix_rt::test]
    async fn test_delete_question_is_idempotent() {
        let (_dir, db) = test_database().await;
        let service = QuestionService::new(db);

        let created = service.create_question(question("Short lived")).await.unwrap();
        service.delete_question(created.id).await.unwrap();
        service.delete_question(created.id).await.unwrap();
        service.delete_question(12345).await.unwrap();

        assert!(service.list_questions().await.unwrap().is_empty());
    }
}
