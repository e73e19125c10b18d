//! Profile model for Fanclub
//!
//! A profile is optional extra data attached to exactly one user, and ties
//! the user to a member tier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::member_tier::MemberTierId;

/// Profile record from the profiles table
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    /// Unique profile identifier
    pub id: Uuid,

    /// Whether the user identifies as male
    pub is_male: bool,

    /// Year of birth
    pub year_of_birth: i32,

    /// Owning user (users.id foreign key, unique)
    pub user_id: Uuid,

    /// Member tier this profile is on
    pub member_tier_id: MemberTierId,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Profile creation input
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfile {
    pub is_male: bool,
    pub year_of_birth: i32,
    pub user_id: Uuid,
    pub member_tier_id: MemberTierId,
}

/// Profile update input; unset fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeProfile {
    pub is_male: Option<bool>,
    pub year_of_birth: Option<i32>,
    pub member_tier_id: Option<MemberTierId>,
}
