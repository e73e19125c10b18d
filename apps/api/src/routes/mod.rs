//! HTTP route handlers for Fanclub
//!
//! The GraphQL endpoint itself lives in `main.rs`; this module holds the
//! plain HTTP surface around it.

pub mod health;

pub use health::{health_router, HealthState};
