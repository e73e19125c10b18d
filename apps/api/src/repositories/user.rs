//! User repository for centralized database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::utils::USER_COLUMNS;
use crate::models::user::{ChangeUser, CreateUser};
use crate::models::User;

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new UserRepository instance
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by their unique ID
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, sqlx::Error> {
        let sql = format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS);
        sqlx::query_as::<_, User>(&sql)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Find all users
    pub async fn find_all(&self) -> Result<Vec<User>, sqlx::Error> {
        let sql = format!("SELECT {} FROM users ORDER BY created_at ASC", USER_COLUMNS);
        sqlx::query_as::<_, User>(&sql).fetch_all(&self.pool).await
    }

    /// Insert a new user
    pub async fn create(&self, input: CreateUser) -> Result<User, sqlx::Error> {
        let sql = format!(
            "INSERT INTO users (name, balance) VALUES ($1, $2) RETURNING {}",
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(input.name)
            .bind(input.balance)
            .fetch_one(&self.pool)
            .await
    }

    /// Update a user; unset input fields keep their current value
    pub async fn update(
        &self,
        user_id: Uuid,
        input: ChangeUser,
    ) -> Result<Option<User>, sqlx::Error> {
        let sql = format!(
            r#"UPDATE users SET
                name = COALESCE($2, name),
                balance = COALESCE($3, balance),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {}"#,
            USER_COLUMNS
        );
        sqlx::query_as::<_, User>(&sql)
            .bind(user_id)
            .bind(input.name)
            .bind(input.balance)
            .fetch_optional(&self.pool)
            .await
    }

    /// Delete a user, returning whether a row was removed
    ///
    /// Profiles, posts and subscription edges cascade via foreign keys.
    pub async fn delete(&self, user_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
