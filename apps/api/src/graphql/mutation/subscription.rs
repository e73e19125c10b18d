//! Subscription mutations for the Fanclub GraphQL API
//!
//! - subscribeTo: Follow another user
//! - unsubscribeFrom: Stop following

use async_graphql::{Context, Object, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repositories::SubscriptionRepository;

/// Subscription-related mutations
#[derive(Default)]
pub struct SubscriptionMutation;

#[Object]
impl SubscriptionMutation {
    /// Subscribe one user to another
    async fn subscribe_to(
        &self,
        ctx: &Context<'_>,
        user_id: Uuid,
        author_id: Uuid,
    ) -> Result<String> {
        if user_id == author_id {
            return Err(async_graphql::Error::new("users cannot subscribe to themselves"));
        }
        let pool = ctx.data::<PgPool>()?;
        let edge = SubscriptionRepository::new(pool.clone())
            .subscribe(user_id, author_id)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db) = &e {
                    if db.is_foreign_key_violation() {
                        return async_graphql::Error::new("user not found");
                    }
                }
                e.into()
            })?;
        if let Some(edge) = edge {
            tracing::info!(
                subscriber_id = %edge.subscriber_id,
                author_id = %edge.author_id,
                "subscribed"
            );
        }
        Ok("subscribed".to_string())
    }

    /// Remove a subscription
    async fn unsubscribe_from(
        &self,
        ctx: &Context<'_>,
        user_id: Uuid,
        author_id: Uuid,
    ) -> Result<String> {
        let pool = ctx.data::<PgPool>()?;
        let removed = SubscriptionRepository::new(pool.clone())
            .unsubscribe(user_id, author_id)
            .await?;
        if !removed {
            return Err(async_graphql::Error::new("subscription not found"));
        }
        Ok("unsubscribed".to_string())
    }
}
