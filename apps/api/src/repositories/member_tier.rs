//! Member tier repository for centralized database operations
//!
//! Tiers are a read-only catalog seeded by migrations; there are no write
//! operations here.

use sqlx::PgPool;

use super::utils::MEMBER_TIER_COLUMNS;
use crate::models::{MemberTier, MemberTierId};

/// Repository for member tier database operations
#[derive(Clone)]
pub struct MemberTierRepository {
    pool: PgPool,
}

impl MemberTierRepository {
    /// Create a new MemberTierRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a member tier by its identifier
    pub async fn find_by_id(&self, tier_id: MemberTierId) -> Result<Option<MemberTier>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM member_tiers WHERE id = $1",
            MEMBER_TIER_COLUMNS
        );
        sqlx::query_as::<_, MemberTier>(&sql)
            .bind(tier_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find all member tiers
    pub async fn find_all(&self) -> Result<Vec<MemberTier>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM member_tiers ORDER BY id ASC",
            MEMBER_TIER_COLUMNS
        );
        sqlx::query_as::<_, MemberTier>(&sql)
            .fetch_all(&self.pool)
            .await
    }
}
