//! Shared utility constants for repositories

// ============================================================================
// SQL Column Constants
//
// These constants define the SELECT column lists for each entity type,
// reducing duplication and ensuring consistency across queries.
// ============================================================================

/// SQL columns for user queries
pub const USER_COLUMNS: &str = "id, name, balance, created_at, updated_at";

/// SQL columns for post queries
pub const POST_COLUMNS: &str = "id, title, content, author_id, created_at, updated_at";

/// SQL columns for profile queries
pub const PROFILE_COLUMNS: &str =
    "id, is_male, year_of_birth, user_id, member_tier_id, created_at, updated_at";

/// SQL columns for member tier queries
pub const MEMBER_TIER_COLUMNS: &str = "id, discount, posts_limit_per_month";
