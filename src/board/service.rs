//! Board aggregation service.
//!
//! Reads posts from the local store and joins them with author summaries
//! fetched from the user directory. Directory problems only ever remove
//! author data; they never fail a read.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, info};

use super::post::{EnrichedPost, NewPost, Post};
use super::repository::PostRepository;
use crate::db::Database;
use crate::directory::{UserDirectory, UserSummary};
use crate::{Result, UserboardError};

/// Maximum length for post titles (in characters).
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum length for post content (in characters).
pub const MAX_CONTENT_LENGTH: usize = 10_000;

fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(UserboardError::Validation("title is required".to_string()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(UserboardError::Validation(format!(
            "title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(UserboardError::Validation(
            "content is required".to_string(),
        ));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(UserboardError::Validation(format!(
            "content must be at most {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Distinct author IDs across `posts`, in ascending order.
fn distinct_author_ids(posts: &[Post]) -> Vec<i64> {
    posts
        .iter()
        .map(|p| p.author_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Service for board posts with read-time author enrichment.
pub struct BoardService<'a, D> {
    db: &'a Database,
    directory: &'a D,
}

impl<'a, D: UserDirectory> BoardService<'a, D> {
    /// Create a new BoardService over a boards database and a user directory.
    pub fn new(db: &'a Database, directory: &'a D) -> Self {
        Self { db, directory }
    }

    /// Store a new post.
    ///
    /// The author ID is not checked against the user service.
    pub async fn create(&self, new_post: NewPost) -> Result<Post> {
        validate_title(&new_post.title)?;
        validate_content(&new_post.content)?;

        let post = PostRepository::new(self.db.pool())
            .create(&new_post)
            .await?;
        info!(post_id = post.id, author_id = post.author_id, "Post created");
        Ok(post)
    }

    /// List every post with its author, in store order.
    ///
    /// Issues exactly one batch lookup for the distinct author IDs.
    pub async fn list_all(&self) -> Result<Vec<EnrichedPost>> {
        let posts = PostRepository::new(self.db.pool()).list_all().await?;
        let author_ids = distinct_author_ids(&posts);

        let summaries = self
            .directory
            .fetch_many(&author_ids)
            .await
            .unwrap_or_default();
        let by_id: HashMap<i64, UserSummary> = summaries
            .into_iter()
            .map(|s| (s.user_id, s))
            .collect();

        let enriched: Vec<EnrichedPost> = posts
            .into_iter()
            .map(|post| {
                let author = by_id.get(&post.author_id).cloned();
                EnrichedPost::new(post, author)
            })
            .collect();
        debug!(
            posts = enriched.len(),
            authors = author_ids.len(),
            with_author = enriched.iter().filter(|p| p.has_author()).count(),
            "Joined posts with author summaries"
        );

        Ok(enriched)
    }

    /// Get one post with its author.
    ///
    /// Returns `NotFound` without contacting the directory when the post
    /// does not exist.
    pub async fn get_one(&self, id: i64) -> Result<EnrichedPost> {
        let post = PostRepository::new(self.db.pool())
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserboardError::NotFound("post".to_string()))?;

        let lookup = self.directory.fetch_one(post.author_id).await;
        debug!(
            post_id = post.id,
            author_id = post.author_id,
            resolved = lookup.is_found(),
            "Looked up post author"
        );
        Ok(EnrichedPost::new(post, lookup.found()))
    }
}
