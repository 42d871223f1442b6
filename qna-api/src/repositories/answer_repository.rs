use crate::models::Answer;
use sqlx::SqliteConnection;

/// Answer rows. Does not check that the parent question exists; callers do.
pub struct AnswerRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> AnswerRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn get(&mut self, id: i64) -> Result<Option<Answer>, sqlx::Error> {
        sqlx::query_as::<_, Answer>(
            "SELECT id, question_id, user_id, text, created_at FROM answers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await
    }

    pub async fn list_for_question(&mut self, question_id: i64) -> Result<Vec<Answer>, sqlx::Error> {
        sqlx::query_as::<_, Answer>(
            "SELECT id, question_id, user_id, text, created_at FROM answers
             WHERE question_id = ? ORDER BY id",
        )
        .bind(question_id)
        .fetch_all(&mut *self.conn)
        .await
    }

    pub async fn create(
        &mut self,
        question_id: i64,
        user_id: &str,
        text: &str,
    ) -> Result<Answer, sqlx::Error> {
        sqlx::query_as::<_, Answer>(
            "INSERT INTO answers (question_id, user_id, text) VALUES (?, ?, ?)
             RETURNING id, question_id, user_id, text, created_at",
        )
        .bind(question_id)
        .bind(user_id)
        .bind(text)
        .fetch_one(&mut *self.conn)
        .await
    }

    /// Returns the number of answers removed (0 if it did not exist).
    pub async fn delete(&mut self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM answers WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected())
    }
}
