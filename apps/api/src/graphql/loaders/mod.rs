//! Batched relation loading for GraphQL
//!
//! This module solves N+1 query problems in relationship resolvers. The
//! generic batching machinery lives in [`batch`]; each relation the schema
//! resolves through a loader has its own [`BatchFn`] implementation over the
//! database pool.
//!
//! There are two kinds of relations:
//! - Single-entity: `Option<T>` for one record by key (profile, member tier)
//! - Collection: `Vec<T>` of related records by parent key (posts,
//!   subscription edges)

pub mod batch;
mod member_tier;
mod posts_by_author;
mod profile_by_user;
mod subscribed_to;
mod subscribers;

pub use batch::{BatchFn, ItemResult, LoadError, Loader, DEFAULT_FLUSH_DELAY};
pub use member_tier::MemberTierBatch;
pub use posts_by_author::PostsByAuthorBatch;
pub use profile_by_user::ProfileByUserBatch;
pub use subscribed_to::SubscribedToBatch;
pub use subscribers::SubscribersBatch;

use std::time::Duration;

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{MemberTier, MemberTierId, Post, Profile, User};

/// Loader for a user's profile, keyed by user id
pub type ProfileByUserLoader = Loader<Uuid, Profile, ProfileByUserBatch>;

/// Loader for an author's posts, keyed by author id
pub type PostsByAuthorLoader = Loader<Uuid, Vec<Post>, PostsByAuthorBatch>;

/// Loader for member tiers, keyed by tier id
pub type MemberTierLoader = Loader<MemberTierId, MemberTier, MemberTierBatch>;

/// Loader for the authors a user follows, keyed by subscriber id
pub type SubscribedToLoader = Loader<Uuid, Vec<User>, SubscribedToBatch>;

/// Loader for a user's followers, keyed by author id
pub type SubscribersLoader = Loader<Uuid, Vec<User>, SubscribersBatch>;

/// Per-request registry of relation loaders
///
/// Constructed fresh for every GraphQL request and injected into the request
/// context, so batching and caching never cross request boundaries. Dropped
/// with the request.
#[derive(Clone)]
pub struct Loaders {
    pub profile_by_user: ProfileByUserLoader,
    pub posts_by_author: PostsByAuthorLoader,
    pub member_tier: MemberTierLoader,
    pub subscribed_to: SubscribedToLoader,
    pub subscribers: SubscribersLoader,
}

impl Loaders {
    /// Create all relation loaders for one request
    pub fn new(pool: PgPool) -> Self {
        Self::with_delay(pool, DEFAULT_FLUSH_DELAY)
    }

    /// Create loaders with a custom flush window
    pub fn with_delay(pool: PgPool, delay: Duration) -> Self {
        Self {
            profile_by_user: Loader::with_delay(ProfileByUserBatch::new(pool.clone()), delay),
            posts_by_author: Loader::with_delay(PostsByAuthorBatch::new(pool.clone()), delay),
            member_tier: Loader::with_delay(MemberTierBatch::new(pool.clone()), delay),
            subscribed_to: Loader::with_delay(SubscribedToBatch::new(pool.clone()), delay),
            subscribers: Loader::with_delay(SubscribersBatch::new(pool), delay),
        }
    }
}
