//! GraphQL type definitions for Fanclub
//!
//! Each type wraps its database model and exposes relation fields through
//! the request's loader registry.

mod member_tier;
mod post;
mod profile;
mod user;

pub use member_tier::{MemberTier, MemberTierId};
pub use post::Post;
pub use profile::Profile;
pub use user::User;
