//! Post mutations for the Fanclub GraphQL API
//!
//! - createPost: Publish a new post
//! - changePost: Edit title or content
//! - deletePost: Remove a post

use async_graphql::{Context, InputObject, Object, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::graphql::types::Post;
use crate::models::post::{ChangePost, CreatePost};
use crate::repositories::PostRepository;

/// Maximum length of a post title
const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length of a post body
const MAX_CONTENT_LENGTH: usize = 50_000;

/// Input type for creating a post
#[derive(Debug, Clone, InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    /// Authoring user's id
    pub author_id: Uuid,
}

/// Input type for changing a post; unset fields are left unchanged
#[derive(Debug, Clone, InputObject)]
pub struct ChangePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
}

fn validate_post(title: Option<&str>, content: Option<&str>) -> Result<()> {
    if let Some(title) = title {
        if title.trim().is_empty() {
            return Err(async_graphql::Error::new("title must not be empty"));
        }
        if title.len() > MAX_TITLE_LENGTH {
            return Err(async_graphql::Error::new(format!(
                "title must be at most {} characters",
                MAX_TITLE_LENGTH
            )));
        }
    }
    if let Some(content) = content {
        if content.len() > MAX_CONTENT_LENGTH {
            return Err(async_graphql::Error::new(format!(
                "content must be at most {} characters",
                MAX_CONTENT_LENGTH
            )));
        }
    }
    Ok(())
}

/// Post-related mutations
#[derive(Default)]
pub struct PostMutation;

#[Object]
impl PostMutation {
    /// Create a new post
    async fn create_post(&self, ctx: &Context<'_>, dto: CreatePostInput) -> Result<Post> {
        validate_post(Some(&dto.title), Some(&dto.content))?;
        let pool = ctx.data::<PgPool>()?;
        let post = PostRepository::new(pool.clone())
            .create(CreatePost {
                title: dto.title,
                content: dto.content,
                author_id: dto.author_id,
            })
            .await?;
        tracing::info!(post_id = %post.id, author_id = %post.author_id, "post created");
        Ok(post.into())
    }

    /// Update an existing post
    async fn change_post(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        dto: ChangePostInput,
    ) -> Result<Post> {
        validate_post(dto.title.as_deref(), dto.content.as_deref())?;
        let pool = ctx.data::<PgPool>()?;
        let post = PostRepository::new(pool.clone())
            .update(
                id,
                ChangePost {
                    title: dto.title,
                    content: dto.content,
                },
            )
            .await?
            .ok_or_else(|| async_graphql::Error::new("post not found"))?;
        Ok(post.into())
    }

    /// Delete a post
    async fn delete_post(&self, ctx: &Context<'_>, id: Uuid) -> Result<String> {
        let pool = ctx.data::<PgPool>()?;
        let deleted = PostRepository::new(pool.clone()).delete(id).await?;
        if !deleted {
            return Err(async_graphql::Error::new("post not found"));
        }
        Ok("deletedPost".to_string())
    }
}
