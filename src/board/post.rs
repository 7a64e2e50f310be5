//! Post model.

use crate::directory::UserSummary;

/// Post entity as stored by the board service.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Post {
    /// Unique post ID.
    pub id: i64,
    /// Post title.
    pub title: String,
    /// Post content.
    pub content: String,
    /// ID of the author in the user service. Never resolved at write time.
    pub author_id: i64,
    /// Post creation timestamp.
    pub created_at: String,
}

/// Data for creating a new post.
#[derive(Debug, Clone)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post content.
    pub content: String,
    /// ID of the author in the user service.
    pub author_id: i64,
}

impl NewPost {
    /// Create a new post with required fields.
    pub fn new(title: impl Into<String>, content: impl Into<String>, author_id: i64) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author_id,
        }
    }
}

/// A post joined with its author's summary.
///
/// `author` is `None` whenever the directory returned no data for
/// `post.author_id`, whatever the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedPost {
    /// The stored post.
    pub post: Post,
    /// Author summary, when resolved.
    pub author: Option<UserSummary>,
}

impl EnrichedPost {
    /// Pair a post with an optional author summary.
    pub fn new(post: Post, author: Option<UserSummary>) -> Self {
        Self { post, author }
    }

    /// Whether the author was resolved.
    pub fn has_author(&self) -> bool {
        self.author.is_some()
    }
}
