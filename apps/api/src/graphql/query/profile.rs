//! Profile queries for the Fanclub GraphQL API

use async_graphql::{Context, Object, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::graphql::types::Profile;
use crate::repositories::ProfileRepository;

/// Profile-related queries
#[derive(Default)]
pub struct ProfileQuery;

#[Object]
impl ProfileQuery {
    /// List all profiles
    async fn profiles(&self, ctx: &Context<'_>) -> Result<Vec<Profile>> {
        let pool = ctx.data::<PgPool>()?;
        let profiles = ProfileRepository::new(pool.clone()).find_all().await?;
        Ok(profiles.into_iter().map(Profile::from).collect())
    }

    /// Get a single profile by id; null when no such profile exists
    async fn profile(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Profile>> {
        let pool = ctx.data::<PgPool>()?;
        let profile = ProfileRepository::new(pool.clone()).find_by_id(id).await?;
        Ok(profile.map(Profile::from))
    }
}
