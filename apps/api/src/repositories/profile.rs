//! Profile repository for centralized database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::utils::PROFILE_COLUMNS;
use crate::models::profile::{ChangeProfile, CreateProfile};
use crate::models::Profile;

/// Repository for profile database operations
#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new ProfileRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a profile by its unique ID
    pub async fn find_by_id(&self, profile_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
        let sql = format!("SELECT {} FROM profiles WHERE id = $1", PROFILE_COLUMNS);
        sqlx::query_as::<_, Profile>(&sql)
            .bind(profile_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find the profile belonging to a user, if any
    pub async fn find_by_user_id(&self, user_id: Uuid) -> Result<Option<Profile>, sqlx::Error> {
        let sql = format!("SELECT {} FROM profiles WHERE user_id = $1", PROFILE_COLUMNS);
        sqlx::query_as::<_, Profile>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find all profiles
    pub async fn find_all(&self) -> Result<Vec<Profile>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM profiles ORDER BY created_at ASC",
            PROFILE_COLUMNS
        );
        sqlx::query_as::<_, Profile>(&sql)
            .fetch_all(&self.pool)
            .await
    }

    /// Insert a new profile
    ///
    /// Fails with a unique violation if the user already has a profile.
    pub async fn create(&self, input: CreateProfile) -> Result<Profile, sqlx::Error> {
        let sql = format!(
            r#"INSERT INTO profiles (is_male, year_of_birth, user_id, member_tier_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {}"#,
            PROFILE_COLUMNS
        );
        sqlx::query_as::<_, Profile>(&sql)
            .bind(input.is_male)
            .bind(input.year_of_birth)
            .bind(input.user_id)
            .bind(input.member_tier_id)
            .fetch_one(&self.pool)
            .await
    }

    /// Update a profile; unset input fields keep their current value
    pub async fn update(
        &self,
        profile_id: Uuid,
        input: ChangeProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let sql = format!(
            r#"UPDATE profiles SET
                is_male = COALESCE($2, is_male),
                year_of_birth = COALESCE($3, year_of_birth),
                member_tier_id = COALESCE($4, member_tier_id),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}"#,
            PROFILE_COLUMNS
        );
        sqlx::query_as::<_, Profile>(&sql)
            .bind(profile_id)
            .bind(input.is_male)
            .bind(input.year_of_birth)
            .bind(input.member_tier_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete a profile, returning whether a row was removed
    pub async fn delete(&self, profile_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(profile_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
