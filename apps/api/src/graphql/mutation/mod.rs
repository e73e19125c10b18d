//! GraphQL mutations for Fanclub
//!
//! This module contains all mutation resolvers, organized by domain.

mod post;
mod profile;
mod subscription;
mod user;

pub use post::PostMutation;
pub use profile::ProfileMutation;
pub use subscription::SubscriptionMutation;
pub use user::UserMutation;

use async_graphql::MergedObject;

/// Root mutation type combining all mutation domains
#[derive(MergedObject, Default)]
pub struct Mutation(UserMutation, PostMutation, ProfileMutation, SubscriptionMutation);
