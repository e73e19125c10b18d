//! Post repository for centralized database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::utils::POST_COLUMNS;
use crate::models::post::{ChangePost, CreatePost};
use crate::models::Post;

/// Repository for post database operations
#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new PostRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a post by its unique ID
    pub async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
        let sql = format!("SELECT {} FROM posts WHERE id = $1", POST_COLUMNS);
        sqlx::query_as::<_, Post>(&sql)
            .bind(post_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find all posts
    pub async fn find_all(&self) -> Result<Vec<Post>, sqlx::Error> {
        let sql = format!("SELECT {} FROM posts ORDER BY created_at ASC", POST_COLUMNS);
        sqlx::query_as::<_, Post>(&sql).fetch_all(&self.pool).await
    }

    /// Insert a new post
    pub async fn create(&self, input: CreatePost) -> Result<Post, sqlx::Error> {
        let sql = format!(
            "INSERT INTO posts (title, content, author_id) VALUES ($1, $2, $3) RETURNING {}",
            POST_COLUMNS
        );
        sqlx::query_as::<_, Post>(&sql)
            .bind(input.title)
            .bind(input.content)
            .bind(input.author_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Update a post; unset input fields keep their current value
    pub async fn update(
        &self,
        post_id: Uuid,
        input: ChangePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let sql = format!(
            r#"UPDATE posts SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}"#,
            POST_COLUMNS
        );
        sqlx::query_as::<_, Post>(&sql)
            .bind(post_id)
            .bind(input.title)
            .bind(input.content)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete a post, returning whether a row was removed
    pub async fn delete(&self, post_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
