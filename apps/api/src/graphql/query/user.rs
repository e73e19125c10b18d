//! User queries for the Fanclub GraphQL API

use async_graphql::{Context, Object, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::graphql::types::User;
use crate::repositories::UserRepository;

/// User-related queries
#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// List all users
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let pool = ctx.data::<PgPool>()?;
        let users = UserRepository::new(pool.clone()).find_all().await?;
        Ok(users.into_iter().map(User::from).collect())
    }

    /// Get a single user by id; null when no such user exists
    async fn user(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<User>> {
        let pool = ctx.data::<PgPool>()?;
        let user = UserRepository::new(pool.clone()).find_by_id(id).await?;
        Ok(user.map(User::from))
    }
}
