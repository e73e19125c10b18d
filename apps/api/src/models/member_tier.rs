//! Member tier model for Fanclub
//!
//! Member tiers are a small fixed catalog (seeded by migration) that
//! profiles reference. Every profile must point at an existing tier; a
//! dangling reference is an application error, not a missing row.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Member tier identifier, stored as a Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_tier_id", rename_all = "UPPERCASE")]
pub enum MemberTierId {
    Basic,
    Business,
}

impl std::fmt::Display for MemberTierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "BASIC"),
            Self::Business => write!(f, "BUSINESS"),
        }
    }
}

/// Member tier record from the member_tiers table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MemberTier {
    /// Tier identifier
    pub id: MemberTierId,

    /// Discount applied to subscriptions, as a fraction
    pub discount: f64,

    /// How many posts a member on this tier may publish per month
    pub posts_limit_per_month: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_id_display() {
        assert_eq!(MemberTierId::Basic.to_string(), "BASIC");
        assert_eq!(MemberTierId::Business.to_string(), "BUSINESS");
    }
}
