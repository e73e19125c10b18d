//! Database repository layer for Fanclub
//!
//! This module provides the data access layer, centralizing all database
//! operations into reusable repositories. This pattern:
//! - Reduces code duplication across resolvers
//! - Provides a single source of truth for database queries
//! - Makes testing easier through dependency injection

pub mod member_tier;
pub mod post;
pub mod profile;
pub mod subscription;
pub mod user;
pub mod utils;

pub use member_tier::MemberTierRepository;
pub use post::PostRepository;
pub use profile::ProfileRepository;
pub use subscription::SubscriptionRepository;
pub use user::UserRepository;
