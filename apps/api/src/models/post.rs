//! Post model for Fanclub

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Post record from the posts table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    /// Unique post identifier
    pub id: Uuid,

    /// Post title
    pub title: String,

    /// Post body
    pub content: String,

    /// Author (users.id foreign key)
    pub author_id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Post creation input
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub author_id: Uuid,
}

/// Post update input; unset fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangePost {
    pub title: Option<String>,
    pub content: Option<String>,
}
