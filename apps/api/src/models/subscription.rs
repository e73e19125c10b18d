//! Subscription model for Fanclub
//!
//! A subscription is an edge between two users: the subscriber follows the
//! author. The pair is the primary key.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Subscription edge from the subscriptions table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subscription {
    /// Following user (users.id foreign key)
    pub subscriber_id: Uuid,

    /// Followed user (users.id foreign key)
    pub author_id: Uuid,

    /// When the subscription was created
    pub created_at: DateTime<Utc>,
}
