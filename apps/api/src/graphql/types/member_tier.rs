//! Member tier GraphQL type

use async_graphql::{Enum, Object};

use crate::models::member_tier::{MemberTier as DbMemberTier, MemberTierId as DbMemberTierId};

/// Member tier identifier for GraphQL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum MemberTierId {
    /// Entry tier
    Basic,
    /// Paid tier with a higher posting limit
    Business,
}

impl From<DbMemberTierId> for MemberTierId {
    fn from(id: DbMemberTierId) -> Self {
        match id {
            DbMemberTierId::Basic => Self::Basic,
            DbMemberTierId::Business => Self::Business,
        }
    }
}

impl From<MemberTierId> for DbMemberTierId {
    fn from(id: MemberTierId) -> Self {
        match id {
            MemberTierId::Basic => Self::Basic,
            MemberTierId::Business => Self::Business,
        }
    }
}

/// Member tier exposed via GraphQL
pub struct MemberTier {
    inner: DbMemberTier,
}

impl From<DbMemberTier> for MemberTier {
    fn from(tier: DbMemberTier) -> Self {
        Self { inner: tier }
    }
}

#[Object]
impl MemberTier {
    /// Tier identifier
    async fn id(&self) -> MemberTierId {
        self.inner.id.into()
    }

    /// Discount applied to subscriptions, as a fraction
    async fn discount(&self) -> f64 {
        self.inner.discount
    }

    /// How many posts a member on this tier may publish per month
    async fn posts_limit_per_month(&self) -> i32 {
        self.inner.posts_limit_per_month
    }
}
