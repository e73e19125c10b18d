//! Subscription repository for centralized database operations

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Subscription;

/// Repository for subscription edge operations
#[derive(Clone)]
pub struct SubscriptionRepository {
    pool: PgPool,
}

impl SubscriptionRepository {
    /// Create a new SubscriptionRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Subscribe one user to another, returning the new edge
    ///
    /// Inserting an already existing edge is a no-op and returns `None`.
    pub async fn subscribe(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        sqlx::query_as(
            r#"INSERT INTO subscriptions (subscriber_id, author_id)
            VALUES ($1, $2)
            ON CONFLICT (subscriber_id, author_id) DO NOTHING
            RETURNING subscriber_id, author_id, created_at"#,
        )
        .bind(subscriber_id)
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Remove a subscription edge, returning whether one existed
    pub async fn unsubscribe(
        &self,
        subscriber_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM subscriptions WHERE subscriber_id = $1 AND author_id = $2")
                .bind(subscriber_id)
                .bind(author_id)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
