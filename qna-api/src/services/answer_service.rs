use super::{ANSWER_NOT_FOUND, QUESTION_NOT_FOUND};
use crate::database::Database;
use crate::error::{AppError, AppResult};
use crate::repositories::{AnswerRepository, QuestionRepository};
use shared_types::{Answer, CreateAnswerRequest};
use tracing::{debug, info, warn};

pub struct AnswerService {
    database: Database,
}

impl AnswerService {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Creates an answer for an existing question.
    ///
    /// The parent lookup always runs before the insert and nothing is written when it
    /// fails. The lookup and the insert are separate statements; if the question is
    /// deleted in between, the store's foreign key rejects the insert and the caller
    /// gets the same not-found error.
    pub async fn create_answer(
        &self,
        question_id: i64,
        request: CreateAnswerRequest,
    ) -> AppResult<Answer> {
        let mut conn = self.database.acquire().await?;

        if !QuestionRepository::new(&mut conn).exists(question_id).await? {
            debug!("Question {} not found, answer rejected", question_id);
            return Err(AppError::NotFound(QUESTION_NOT_FOUND.to_string()));
        }

        info!("Creating answer, text={}", request.text);

        let answer = AnswerRepository::new(&mut conn)
            .create(question_id, &request.user_id, &request.text)
            .await
            .map_err(|e| insert_error(question_id, e))?;

        info!("Answer {} created successfully", answer.id);
        Ok(answer.into())
    }

    pub async fn get_answer(&self, answer_id: i64) -> AppResult<Answer> {
        let mut conn = self.database.acquire().await?;

        AnswerRepository::new(&mut conn)
            .get(answer_id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound(ANSWER_NOT_FOUND.to_string()))
    }

    /// Deleting an unknown id succeeds.
    pub async fn delete_answer(&self, answer_id: i64) -> AppResult<()> {
        warn!("Deleting answer, answer_id={}", answer_id);

        let mut conn = self.database.acquire().await?;
        let removed = AnswerRepository::new(&mut conn).delete(answer_id).await?;

        if removed == 0 {
            debug!("Answer {} did not exist, nothing deleted", answer_id);
        }
        info!("Answer deleted");
        Ok(())
    }
}

/// A foreign-key failure on insert means the question vanished after the existence check.
fn insert_error(question_id: i64, e: sqlx::Error) -> AppError {
    let orphaned = e
        .as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation());
    if orphaned {
        warn!(
            "Question {} was deleted before its answer could be stored",
            question_id
        );
        AppError::NotFound(QUESTION_NOT_FOUND.to_string())
    } else {
        AppError::Database(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::QuestionService;
    use crate::test_support::test_database;
    use shared_types::CreateQuestionRequest;

    fn answer(text: &str, user_id: &str) -> CreateAnswerRequest {
        CreateAnswerRequest {
            text: text.to_string(),
            user_id: user_id.to_string(),
        }
    }

    async fn count_answers(db: &Database) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM answers")
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    #[actix_rt::test]
    async fn test_create_answer_for_missing_question_writes_nothing() {
        let (_dir, db) = test_database().await;
        let service = AnswerService::new(db.clone());

        let err = service
            .create_answer(999, answer("Some answer", "user-123"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Question not found"));
        assert_eq!(count_answers(&db).await, 0);
    }

    #[actix_rt::test]
    async fn test_create_and_get_answer() {
        let (_dir, db) = test_database().await;
        let question = QuestionService::new(db.clone())
            .create_question(CreateQuestionRequest {
                text: "What is Python?".to_string(),
            })
            .await
            .unwrap();
        let service = AnswerService::new(db);

        let created = service
            .create_answer(question.id, answer("A lang", "u1"))
            .await
            .unwrap();
        assert_eq!(created.question_id, question.id);
        assert_eq!(created.user_id, "u1");

        let fetched = service.get_answer(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[actix_rt::test]
    async fn test_same_user_answers_get_distinct_ids() {
        let (_dir, db) = test_database().await;
        let question = QuestionService::new(db.clone())
            .create_question(CreateQuestionRequest {
                text: "What is Python?".to_string(),
            })
            .await
            .unwrap();
        let service = AnswerService::new(db.clone());

        let first = service
            .create_answer(question.id, answer("Answer 1", "user-123"))
            .await
            .unwrap();
        let second = service
            .create_answer(question.id, answer("Answer 2", "user-123"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(count_answers(&db).await, 2);
    }

    #[actix_rt::test]
    async fn test_foreign_key_failure_maps_to_question_not_found() {
        let (_dir, db) = test_database().await;
        let mut conn = db.acquire().await.unwrap();

        // Same state as a question deleted between the existence check and the insert
        let err = AnswerRepository::new(&mut conn)
            .create(999, "user-123", "too late")
            .await
            .unwrap_err();

        let mapped = insert_error(999, err);
        assert!(matches!(mapped, AppError::NotFound(ref msg) if msg == "Question not found"));
        assert_eq!(count_answers(&db).await, 0);
    }

    #[test]
    fn test_other_insert_failures_stay_database_errors() {
        let mapped = insert_error(1, sqlx::Error::PoolTimedOut);
        assert!(matches!(mapped, AppError::Database(sqlx::Error::PoolTimedOut)));
    }

    #[actix_rt::test]
    async fn test_get_answer_not_found() {
        let (_dir, db) = test_database().await;
        let err = AnswerService::new(db).get_answer(999).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref msg) if msg == "Answer not found"));
    }

    #[actix_rt::test]
    async fn test_answers_gone_after_question_delete() {
        let (_dir, db) = test_database().await;
        let questions = QuestionService::new(db.clone());
        let answers = AnswerService::new(db.clone());

        let question = questions
            .create_question(CreateQuestionRequest {
                text: "Doomed question".to_string(),
            })
            .await
            .unwrap();
        let a1 = answers.create_answer(question.id, answer("one", "u1")).await.unwrap();
        let a2 = answers.create_answer(question.id, answer("two", "u2")).await.unwrap();

        questions.delete_question(question.id).await.unwrap();

        assert!(matches!(answers.get_answer(a1.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(answers.get_answer(a2.id).await, Err(AppError::NotFound(_))));
        assert_eq!(count_answers(&db).await, 0);
    }

    #[actix_rt::test]
    async fn test_delete_answer_is_idempotent() {
        let (_dir, db) = test_database().await;
        let service = AnswerService::new(db);

        service.delete_answer(1).await.unwrap();
        service.delete_answer(1).await.unwrap();
    }
}
