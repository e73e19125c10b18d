//! User GraphQL type
//!
//! The user type is self-referential through the subscription edges
//! (user → subscribers → user → …); the depth guard bounds how far clients
//! can follow the cycle, and every relation field here goes through the
//! request's loader registry so sibling users share one batched query per
//! relation.

use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::graphql::loaders::Loaders;
use crate::models::User as DbUser;

use super::post::Post;
use super::profile::Profile;

/// User exposed via GraphQL
pub struct User {
    inner: DbUser,
}

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        Self { inner: user }
    }
}

#[Object]
impl User {
    /// Unique user identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Display name
    async fn name(&self) -> &str {
        &self.inner.name
    }

    /// Account balance
    async fn balance(&self) -> f64 {
        self.inner.balance
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Last update timestamp
    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }

    // Relation fields, all batched per request

    /// This user's profile, if they have one
    async fn profile(&self, ctx: &Context<'_>) -> Result<Option<Profile>> {
        let loaders = ctx.data::<Loaders>()?;
        let profile = loaders.profile_by_user.load(self.inner.id).await?;
        Ok(profile.map(Profile::from))
    }

    /// Posts authored by this user
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let loaders = ctx.data::<Loaders>()?;
        let posts = loaders.posts_by_author.load(self.inner.id).await?;
        Ok(posts
            .unwrap_or_default()
            .into_iter()
            .map(Post::from)
            .collect())
    }

    /// Authors this user subscribes to
    async fn subscribed_to(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let loaders = ctx.data::<Loaders>()?;
        let authors = loaders.subscribed_to.load(self.inner.id).await?;
        Ok(authors
            .unwrap_or_default()
            .into_iter()
            .map(User::from)
            .collect())
    }

    /// Users subscribed to this user
    async fn subscribers(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let loaders = ctx.data::<Loaders>()?;
        let subscribers = loaders.subscribers.load(self.inner.id).await?;
        Ok(subscribers
            .unwrap_or_default()
            .into_iter()
            .map(User::from)
            .collect())
    }
}
