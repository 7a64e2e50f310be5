//! Request DTOs for the user and board APIs.

use serde::Deserialize;
use validator::Validate;

use super::validation::{no_control_chars, not_empty_trimmed};
use crate::web::error::ApiError;

/// Sign-up request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    /// Email address.
    #[validate(email(message = "Must be a valid email address"), length(max = 254))]
    pub email: String,
    /// Display name.
    #[validate(
        length(max = 50),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub name: String,
    /// Password, stored as given.
    #[validate(length(min = 1, message = "Must not be empty"))]
    pub password: String,
}

/// Create board post request.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardRequest {
    /// Post title.
    #[validate(
        length(max = 100),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub title: String,
    /// Post content.
    #[validate(
        length(max = 10000),
        custom(function = "not_empty_trimmed"),
        custom(function = "no_control_chars")
    )]
    pub content: String,
    /// Author ID in the user service. Not checked on write.
    pub user_id: i64,
}

/// Query for `GET /users`.
#[derive(Debug, Default, Deserialize)]
pub struct UserIdsQuery {
    /// Comma-separated user IDs, e.g. `1,2,3`.
    pub ids: Option<String>,
}

impl UserIdsQuery {
    /// Parse the `ids` parameter.
    ///
    /// Returns `None` when the parameter is missing. Empty segments are
    /// skipped, so `ids=` yields an empty list.
    pub fn parse_ids(&self) -> Result<Option<Vec<i64>>, ApiError> {
        let Some(raw) = self.ids.as_deref() else {
            return Ok(None);
        };

        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|_| ApiError::bad_request(format!("Invalid user id: {s}")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
