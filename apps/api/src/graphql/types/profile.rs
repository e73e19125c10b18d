//! Profile GraphQL type

use async_graphql::{Context, Object, Result};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::graphql::loaders::Loaders;
use crate::models::Profile as DbProfile;

use super::member_tier::{MemberTier, MemberTierId};

/// Profile exposed via GraphQL
pub struct Profile {
    inner: DbProfile,
}

impl From<DbProfile> for Profile {
    fn from(profile: DbProfile) -> Self {
        Self { inner: profile }
    }
}

#[Object]
impl Profile {
    /// Unique profile identifier
    async fn id(&self) -> Uuid {
        self.inner.id
    }

    /// Whether the user identifies as male
    async fn is_male(&self) -> bool {
        self.inner.is_male
    }

    /// Year of birth
    async fn year_of_birth(&self) -> i32 {
        self.inner.year_of_birth
    }

    /// Owning user's id
    async fn user_id(&self) -> Uuid {
        self.inner.user_id
    }

    /// Member tier identifier
    async fn member_tier_id(&self) -> MemberTierId {
        self.inner.member_tier_id.into()
    }

    /// The member tier this profile is on (batched per request)
    ///
    /// A profile referencing a tier that does not exist is an error, not a
    /// null: the loader reports the missing key as a failed result.
    async fn member_tier(&self, ctx: &Context<'_>) -> Result<MemberTier> {
        let loaders = ctx.data::<Loaders>()?;
        let tier = loaders
            .member_tier
            .load(self.inner.member_tier_id)
            .await?
            .ok_or_else(|| async_graphql::Error::new("member tier unavailable"))?;
        Ok(tier.into())
    }

    /// Creation timestamp
    async fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    /// Last update timestamp
    async fn updated_at(&self) -> DateTime<Utc> {
        self.inner.updated_at
    }
}
