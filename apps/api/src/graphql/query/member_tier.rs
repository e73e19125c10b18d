//! Member tier queries for the Fanclub GraphQL API

use async_graphql::{Context, Object, Result};
use sqlx::PgPool;

use crate::graphql::types::{MemberTier, MemberTierId};
use crate::repositories::MemberTierRepository;

/// Member-tier-related queries
#[derive(Default)]
pub struct MemberTierQuery;

#[Object]
impl MemberTierQuery {
    /// List the member tier catalog
    async fn member_tiers(&self, ctx: &Context<'_>) -> Result<Vec<MemberTier>> {
        let pool = ctx.data::<PgPool>()?;
        let tiers = MemberTierRepository::new(pool.clone()).find_all().await?;
        Ok(tiers.into_iter().map(MemberTier::from).collect())
    }

    /// Get a single member tier by id
    ///
    /// Unlike the profile → tier relation, a missing tier here is a plain
    /// null: the top-level lookup has no profile asserting the tier exists.
    async fn member_tier(
        &self,
        ctx: &Context<'_>,
        id: MemberTierId,
    ) -> Result<Option<MemberTier>> {
        let pool = ctx.data::<PgPool>()?;
        let tier = MemberTierRepository::new(pool.clone())
            .find_by_id(id.into())
            .await?;
        Ok(tier.map(MemberTier::from))
    }
}
