//! Post queries for the Fanclub GraphQL API

use async_graphql::{Context, Object, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::graphql::types::Post;
use crate::repositories::PostRepository;

/// Post-related queries
#[derive(Default)]
pub struct PostQuery;

#[Object]
impl PostQuery {
    /// List all posts
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let pool = ctx.data::<PgPool>()?;
        let posts = PostRepository::new(pool.clone()).find_all().await?;
        Ok(posts.into_iter().map(Post::from).collect())
    }

    /// Get a single post by id; null when no such post exists
    async fn post(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<Post>> {
        let pool = ctx.data::<PgPool>()?;
        let post = PostRepository::new(pool.clone()).find_by_id(id).await?;
        Ok(post.map(Post::from))
    }
}
