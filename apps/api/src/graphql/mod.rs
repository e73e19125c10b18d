//! GraphQL schema and resolvers for Fanclub
//!
//! This module contains the async-graphql schema including:
//! - Query resolvers for users, posts, profiles and member tiers
//! - Mutation resolvers for CRUD and subscription edges
//! - Batched relation loaders scoped to each request
//! - Depth validation run before execution

pub mod depth;
pub mod loaders;
pub mod mutation;
pub mod query;
pub mod schema;
pub mod types;

pub use depth::{check_depth, DepthViolation};
pub use loaders::Loaders;
pub use schema::{build_schema, execute_request, FanclubSchema};
