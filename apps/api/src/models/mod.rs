//! Database models and types for Fanclub
//!
//! This module contains SQLx models for:
//! - Users and their balances
//! - Profiles and member tiers
//! - Posts
//! - Subscription edges between users

pub mod member_tier;
pub mod post;
pub mod profile;
pub mod subscription;
pub mod user;

pub use member_tier::{MemberTier, MemberTierId};
pub use post::Post;
pub use profile::Profile;
pub use subscription::Subscription;
pub use user::User;
