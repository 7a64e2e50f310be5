//! Response DTOs for the user and board APIs.

use serde::Serialize;

use crate::board::EnrichedPost;
use crate::directory::UserSummary;
use crate::user::User;

/// User as returned by the user service. The password never leaves the service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User ID.
    pub user_id: i64,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// Author attached to a board response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInfo {
    /// Author ID.
    pub user_id: i64,
    /// Author display name.
    pub name: String,
}

impl From<UserSummary> for AuthorInfo {
    fn from(summary: UserSummary) -> Self {
        Self {
            user_id: summary.user_id,
            name: summary.name,
        }
    }
}

/// Board post as returned by the board service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardResponse {
    /// Post ID.
    pub board_id: i64,
    /// Post title.
    pub title: String,
    /// Post content.
    pub content: String,
    /// Author, serialized as `null` when it could not be resolved.
    pub user: Option<AuthorInfo>,
}

impl From<EnrichedPost> for BoardResponse {
    fn from(enriched: EnrichedPost) -> Self {
        let EnrichedPost { post, author } = enriched;
        Self {
            board_id: post.id,
            title: post.title,
            content: post.content,
            user: author.map(AuthorInfo::from),
        }
    }
}
