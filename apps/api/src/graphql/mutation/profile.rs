//! Profile mutations for the Fanclub GraphQL API
//!
//! - createProfile: Attach a profile to a user
//! - changeProfile: Update profile fields or switch tier
//! - deleteProfile: Remove a profile

use async_graphql::{Context, InputObject, Object, Result};
use chrono::{Datelike, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::graphql::types::{MemberTierId, Profile};
use crate::models::profile::{ChangeProfile, CreateProfile};
use crate::repositories::ProfileRepository;

/// Earliest accepted year of birth
const MIN_YEAR_OF_BIRTH: i32 = 1900;

/// Input type for creating a profile
#[derive(Debug, Clone, InputObject)]
pub struct CreateProfileInput {
    pub is_male: bool,
    pub year_of_birth: i32,
    /// Owning user's id; a user can have at most one profile
    pub user_id: Uuid,
    pub member_tier_id: MemberTierId,
}

/// Input type for changing a profile; unset fields are left unchanged
#[derive(Debug, Clone, InputObject)]
pub struct ChangeProfileInput {
    pub is_male: Option<bool>,
    pub year_of_birth: Option<i32>,
    pub member_tier_id: Option<MemberTierId>,
}

fn validate_year_of_birth(year: i32) -> Result<()> {
    let current_year = Utc::now().year();
    if year < MIN_YEAR_OF_BIRTH || year > current_year {
        return Err(async_graphql::Error::new(format!(
            "yearOfBirth must be between {} and {}",
            MIN_YEAR_OF_BIRTH, current_year
        )));
    }
    Ok(())
}

/// Profile-related mutations
#[derive(Default)]
pub struct ProfileMutation;

#[Object]
impl ProfileMutation {
    /// Create a profile for a user
    async fn create_profile(
        &self,
        ctx: &Context<'_>,
        dto: CreateProfileInput,
    ) -> Result<Profile> {
        validate_year_of_birth(dto.year_of_birth)?;
        let pool = ctx.data::<PgPool>()?;
        let profile = ProfileRepository::new(pool.clone())
            .create(CreateProfile {
                is_male: dto.is_male,
                year_of_birth: dto.year_of_birth,
                user_id: dto.user_id,
                member_tier_id: dto.member_tier_id.into(),
            })
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db) = &e {
                    if db.is_unique_violation() {
                        return async_graphql::Error::new("user already has a profile");
                    }
                    if db.is_foreign_key_violation() {
                        return async_graphql::Error::new("user not found");
                    }
                }
                e.into()
            })?;
        tracing::info!(profile_id = %profile.id, user_id = %profile.user_id, "profile created");
        Ok(profile.into())
    }

    /// Update an existing profile
    async fn change_profile(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        dto: ChangeProfileInput,
    ) -> Result<Profile> {
        if let Some(year) = dto.year_of_birth {
            validate_year_of_birth(year)?;
        }
        let pool = ctx.data::<PgPool>()?;
        let profile = ProfileRepository::new(pool.clone())
            .update(
                id,
                ChangeProfile {
                    is_male: dto.is_male,
                    year_of_birth: dto.year_of_birth,
                    member_tier_id: dto.member_tier_id.map(Into::into),
                },
            )
            .await?
            .ok_or_else(|| async_graphql::Error::new("profile not found"))?;
        Ok(profile.into())
    }

    /// Delete a profile
    async fn delete_profile(&self, ctx: &Context<'_>, id: Uuid) -> Result<String> {
        let pool = ctx.data::<PgPool>()?;
        let deleted = ProfileRepository::new(pool.clone()).delete(id).await?;
        if !deleted {
            return Err(async_graphql::Error::new("profile not found"));
        }
        Ok("deletedProfile".to_string())
    }
}
