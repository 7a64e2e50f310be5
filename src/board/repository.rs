//! Post repository.
//!
//! This module provides store operations for posts in the database.

use super::post::{NewPost, Post};
use crate::db::DbPool;
use crate::Result;

/// Repository for post store operations.
pub struct PostRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> PostRepository<'a> {
    /// Create a new PostRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new post inside a local transaction.
    ///
    /// The transaction covers only the boards database; `author_id` is
    /// stored verbatim.
    pub async fn create(&self, new_post: &NewPost) -> Result<Post> {
        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            "INSERT INTO boards (title, content, author_id) VALUES ($1, $2, $3)
             RETURNING id, title, content, author_id, created_at",
        )
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(new_post.author_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(post)
    }

    /// Get a post by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, author_id, created_at FROM boards WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(post)
    }

    /// List all posts in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            "SELECT id, title, content, author_id, created_at FROM boards ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }

    /// Count all posts.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM boards")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
