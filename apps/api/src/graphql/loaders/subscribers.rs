//! Subscribers batch fetch
//!
//! Batches `User.subscribers` lookups: for each author, the users following
//! them. The mirror of [`super::subscribed_to`].

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::batch::{BatchFn, ItemResult, LoadError};
use crate::models::User;

/// Joined row: a subscriber plus the author edge it was fetched for
#[derive(FromRow)]
struct SubscriberForAuthor {
    key_id: Uuid,
    #[sqlx(flatten)]
    user: User,
}

/// Batched followers lookup keyed by author id
#[derive(Clone)]
pub struct SubscribersBatch {
    pool: PgPool,
}

impl SubscribersBatch {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BatchFn<Uuid, Vec<User>> for SubscribersBatch {
    async fn fetch(&self, keys: &[Uuid]) -> Result<Vec<ItemResult<Vec<User>>>, LoadError> {
        let rows: Vec<SubscriberForAuthor> = sqlx::query_as(
            r#"SELECT s.author_id AS key_id,
                u.id, u.name, u.balance, u.created_at, u.updated_at
            FROM users u
            JOIN subscriptions s ON s.subscriber_id = u.id
            WHERE s.author_id = ANY($1)"#,
        )
        .bind(keys)
        .fetch_all(&self.pool)
        .await
        .map_err(LoadError::from)?;

        let mut by_author: HashMap<Uuid, Vec<User>> = HashMap::new();
        for row in rows {
            by_author.entry(row.key_id).or_default().push(row.user);
        }

        Ok(keys
            .iter()
            .map(|key| Ok(Some(by_author.remove(key).unwrap_or_default())))
            .collect())
    }
}
