//! Profile-by-user batch fetch
//!
//! Batches `User.profile` lookups into a single query. A user without a
//! profile is a valid absence and resolves to `None`.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::batch::{BatchFn, ItemResult, LoadError};
use crate::models::Profile;
use crate::repositories::utils::PROFILE_COLUMNS;

/// Batched profile lookup keyed by user id
#[derive(Clone)]
pub struct ProfileByUserBatch {
    pool: PgPool,
}

impl ProfileByUserBatch {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BatchFn<Uuid, Profile> for ProfileByUserBatch {
    async fn fetch(&self, keys: &[Uuid]) -> Result<Vec<ItemResult<Profile>>, LoadError> {
        let sql = format!(
            "SELECT {} FROM profiles WHERE user_id = ANY($1)",
            PROFILE_COLUMNS
        );
        let profiles: Vec<Profile> = sqlx::query_as(&sql)
            .bind(keys)
            .fetch_all(&self.pool)
            .await
            .map_err(LoadError::from)?;

        let mut by_user: HashMap<Uuid, Profile> =
            profiles.into_iter().map(|p| (p.user_id, p)).collect();

        Ok(keys.iter().map(|key| Ok(by_user.remove(key))).collect())
    }
}
