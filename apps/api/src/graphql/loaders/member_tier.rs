//! Member-tier batch fetch
//!
//! Batches `Profile.memberTier` lookups. Unlike the other relations, a
//! missing tier is an application error: every profile must reference an
//! existing tier, so absence surfaces as `LoadError::NotFound` for that key
//! rather than `None`.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use super::batch::{BatchFn, ItemResult, LoadError};
use crate::models::{MemberTier, MemberTierId};
use crate::repositories::utils::MEMBER_TIER_COLUMNS;

/// Batched member tier lookup keyed by tier id
#[derive(Clone)]
pub struct MemberTierBatch {
    pool: PgPool,
}

impl MemberTierBatch {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BatchFn<MemberTierId, MemberTier> for MemberTierBatch {
    async fn fetch(
        &self,
        keys: &[MemberTierId],
    ) -> Result<Vec<ItemResult<MemberTier>>, LoadError> {
        let sql = format!(
            "SELECT {} FROM member_tiers WHERE id = ANY($1)",
            MEMBER_TIER_COLUMNS
        );
        let tiers: Vec<MemberTier> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(LoadError::from)?;

        let mut by_id: HashMap<MemberTierId, MemberTier> =
            tiers.into_iter().map(|t| (t.id, t)).collect();

        Ok(keys
            .iter()
            .map(|key| match by_id.remove(key) {
                Some(tier) => Ok(Some(tier)),
                None => Err(LoadError::NotFound {
                    resource: "member tier",
                    id: key.to_string(),
                }),
            })
            .collect())
    }
}
