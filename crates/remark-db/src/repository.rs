use chrono::{DateTime, Utc};
use remark_core::error::AppError;
use remark_core::models::{Comment, NewComment};
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

/// Repository for comment persistence in PostgreSQL.
#[derive(Clone)]
pub struct CommentRepository {
    pool: Pool<Postgres>,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch every comment in the collection. No filtering, no ordering
    /// guarantee.
    pub async fn list(&self) -> Result<Vec<Comment>, AppError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT id, document, created_at
            FROM comments
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Insert a new comment document. Returns the generated UUID.
    pub async fn insert(&self, comment: &NewComment) -> Result<Uuid, AppError> {
        let row: (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO comments (document)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(&comment.document)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.0)
    }

    /// Delete the comment with the given id, if it exists. Succeeds whether
    /// or not a matching row was found.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM comments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        tracing::debug!(rows = result.rows_affected(), "deleted comment {id}");
        Ok(())
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;
        Ok(())
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    document: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: row.id,
            document: row.document,
            created_at: row.created_at,
        }
    }
}
