//! User service.
//!
//! Sign-up and lookup operations backing the user service's HTTP surface.

use tracing::info;

use super::model::{NewUser, User};
use super::repository::UserRepository;
use crate::db::Database;
use crate::{Result, UserboardError};

/// Maximum length for display names (in characters).
pub const MAX_NAME_LENGTH: usize = 50;

/// Maximum length for email addresses (in characters).
const MAX_EMAIL_LENGTH: usize = 254;

fn validate_new_user(new_user: &NewUser) -> Result<()> {
    let email = new_user.email.trim();
    if email.is_empty() {
        return Err(UserboardError::Validation("email is required".to_string()));
    }
    if email.chars().count() > MAX_EMAIL_LENGTH || !email.contains('@') {
        return Err(UserboardError::Validation(
            "email must be a valid address".to_string(),
        ));
    }
    if new_user.name.trim().is_empty() {
        return Err(UserboardError::Validation("name is required".to_string()));
    }
    if new_user.name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserboardError::Validation(format!(
            "name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    if new_user.password.is_empty() {
        return Err(UserboardError::Validation(
            "password is required".to_string(),
        ));
    }
    Ok(())
}

/// Service for user account operations.
pub struct UserService<'a> {
    db: &'a Database,
}

impl<'a> UserService<'a> {
    /// Create a new UserService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Register a new user.
    pub async fn sign_up(&self, new_user: NewUser) -> Result<User> {
        validate_new_user(&new_user)?;

        let repo = UserRepository::new(self.db.pool());
        let user = repo.create(&new_user).await?;
        info!(user_id = user.id, "User signed up");
        Ok(user)
    }

    /// Get a single user.
    pub async fn get_user(&self, id: i64) -> Result<User> {
        UserRepository::new(self.db.pool())
            .get_by_id(id)
            .await?
            .ok_or_else(|| UserboardError::NotFound("user".to_string()))
    }

    /// Get every known user among `ids`; unknown IDs are omitted.
    pub async fn get_users(&self, ids: &[i64]) -> Result<Vec<User>> {
        UserRepository::new(self.db.pool()).list_by_ids(ids).await
    }

    /// List all users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        UserRepository::new(self.db.pool()).list_all().await
    }
}
