//! GraphQL queries for Fanclub
//!
//! This module contains all query resolvers, organized by domain.

mod member_tier;
mod post;
mod profile;
mod user;

pub use member_tier::MemberTierQuery;
pub use post::PostQuery;
pub use profile::ProfileQuery;
pub use user::UserQuery;

use async_graphql::MergedObject;

/// Root query type combining all query domains
#[derive(MergedObject, Default)]
pub struct Query(UserQuery, PostQuery, ProfileQuery, MemberTierQuery);
