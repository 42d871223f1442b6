use crate::models::{Question, QuestionWithAnswers};
use crate::repositories::AnswerRepository;
use sqlx::SqliteConnection;

pub struct QuestionRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> QuestionRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&mut self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>("SELECT id, text, created_at FROM questions")
            .fetch_all(&mut *self.conn)
            .await
    }

    /// Fetches the question and every answer that references it.
    pub async fn get(&mut self, id: i64) -> Result<Option<QuestionWithAnswers>, sqlx::Error> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, text, created_at FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        let Some(question) = question else {
            return Ok(None);
        };

        let answers = AnswerRepository::new(&mut *self.conn)
            .list_for_question(question.id)
            .await?;

        Ok(Some(QuestionWithAnswers { question, answers }))
    }

    pub async fn exists(&mut self, id: i64) -> Result<bool, sqlx::Error> {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM questions WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?;
        Ok(found.is_some())
    }

    pub async fn create(&mut self, text: &str) -> Result<Question, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "INSERT INTO questions (text) VALUES (?) RETURNING id, text, created_at",
        )
        .bind(text)
        .fetch_one(&mut *self.conn)
        .await
    }

    /// Removes the question; its answers go with it through `ON DELETE CASCADE`.
    /// Returns the number of questions removed (0 if it did not exist).
    pub async fn delete(&mut self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected())
    }
}
