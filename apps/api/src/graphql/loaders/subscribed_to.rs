//! Subscribed-to batch fetch
//!
//! Batches `User.subscribedTo` lookups: for each subscriber, the authors
//! they follow. Returned rows carry the subscriber id alongside the author
//! record so the batch can be regrouped per key; a user following nobody
//! resolves to an empty list.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::batch::{BatchFn, ItemResult, LoadError};
use crate::models::User;

/// Joined row: an author plus the subscriber edge it was fetched for
#[derive(FromRow)]
struct AuthorForSubscriber {
    key_id: Uuid,
    #[sqlx(flatten)]
    user: User,
}

/// Batched authors-followed lookup keyed by subscriber id
#[derive(Clone)]
pub struct SubscribedToBatch {
    pool: PgPool,
}

impl SubscribedToBatch {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BatchFn<Uuid, Vec<User>> for SubscribedToBatch {
    async fn fetch(&self, keys: &[Uuid]) -> Result<Vec<ItemResult<Vec<User>>>, LoadError> {
        let rows: Vec<AuthorForSubscriber> = sqlx::query_as(
            r#"SELECT s.subscriber_id AS key_id,
                u.id, u.name, u.balance, u.created_at, u.updated_at
            FROM users u
            JOIN subscriptions s ON s.author_id = u.id
            WHERE s.subscriber_id = ANY($1)"#,
        )
        .bind(keys)
        .fetch_all(&self.pool)
        .await
        .map_err(LoadError::from)?;

        let mut by_subscriber: HashMap<Uuid, Vec<User>> = HashMap::new();
        for row in rows {
            by_subscriber.entry(row.key_id).or_default().push(row.user);
        }

        Ok(keys
            .iter()
            .map(|key| Ok(Some(by_subscriber.remove(key).unwrap_or_default())))
            .collect())
    }
}
