//! Posts-by-author batch fetch
//!
//! Batches `User.posts` lookups into a single query, returning all posts for
//! each author. An author with no posts resolves to an empty list.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::batch::{BatchFn, ItemResult, LoadError};
use crate::models::Post;
use crate::repositories::utils::POST_COLUMNS;

/// Batched post-list lookup keyed by author id
#[derive(Clone)]
pub struct PostsByAuthorBatch {
    pool: PgPool,
}

impl PostsByAuthorBatch {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BatchFn<Uuid, Vec<Post>> for PostsByAuthorBatch {
    async fn fetch(&self, keys: &[Uuid]) -> Result<Vec<ItemResult<Vec<Post>>>, LoadError> {
        let sql = format!(
            "SELECT {} FROM posts WHERE author_id = ANY($1) ORDER BY created_at ASC",
            POST_COLUMNS
        );
        let posts: Vec<Post> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(LoadError::from)?;

        let mut by_author: HashMap<Uuid, Vec<Post>> = HashMap::new();
        for post in posts {
            by_author.entry(post.author_id).or_default().push(post);
        }

        Ok(keys
            .iter()
            .map(|key| Ok(Some(by_author.remove(key).unwrap_or_default())))
            .collect())
    }
}
