//! User mutations for the Fanclub GraphQL API
//!
//! - createUser: Register a new user
//! - changeUser: Update name or balance
//! - deleteUser: Remove a user and everything hanging off them

use async_graphql::{Context, InputObject, Object, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::graphql::types::User;
use crate::models::user::{ChangeUser, CreateUser};
use crate::repositories::UserRepository;

/// Maximum length of a user name
const MAX_NAME_LENGTH: usize = 255;

/// Input type for creating a user
#[derive(Debug, Clone, InputObject)]
pub struct CreateUserInput {
    /// Display name
    pub name: String,
    /// Starting balance
    pub balance: f64,
}

/// Input type for changing a user; unset fields are left unchanged
#[derive(Debug, Clone, InputObject)]
pub struct ChangeUserInput {
    pub name: Option<String>,
    pub balance: Option<f64>,
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(async_graphql::Error::new("name must not be empty"));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(async_graphql::Error::new(format!(
            "name must be at most {} characters",
            MAX_NAME_LENGTH
        )));
    }
    Ok(())
}

/// User-related mutations
#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Create a new user
    async fn create_user(&self, ctx: &Context<'_>, dto: CreateUserInput) -> Result<User> {
        validate_name(&dto.name)?;
        let pool = ctx.data::<PgPool>()?;
        let user = UserRepository::new(pool.clone())
            .create(CreateUser {
                name: dto.name,
                balance: dto.balance,
            })
            .await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user.into())
    }

    /// Update an existing user
    async fn change_user(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        dto: ChangeUserInput,
    ) -> Result<User> {
        if let Some(name) = &dto.name {
            validate_name(name)?;
        }
        let pool = ctx.data::<PgPool>()?;
        let user = UserRepository::new(pool.clone())
            .update(
                id,
                ChangeUser {
                    name: dto.name,
                    balance: dto.balance,
                },
            )
            .await?
            .ok_or_else(|| async_graphql::Error::new("user not found"))?;
        Ok(user.into())
    }

    /// Delete a user; their profile, posts and subscription edges go too
    async fn delete_user(&self, ctx: &Context<'_>, id: Uuid) -> Result<String> {
        let pool = ctx.data::<PgPool>()?;
        let deleted = UserRepository::new(pool.clone()).delete(id).await?;
        if !deleted {
            return Err(async_graphql::Error::new("user not found"));
        }
        tracing::info!(user_id = %id, "user deleted");
        Ok("deletedUser".to_string())
    }
}
