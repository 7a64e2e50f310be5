//! User model.

use std::fmt;

/// User entity as stored by the user service.
///
/// `password` is kept opaque and never leaves the service.
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, issued by the store.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Password as submitted at sign-up.
    pub password: String,
    /// Account creation timestamp.
    pub created_at: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Data for creating a new user.
#[derive(Clone)]
pub struct NewUser {
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Password.
    pub password: String,
}

impl NewUser {
    /// Create a new user with required fields.
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = NewUser::new("alice@example.com", "Alice", "secret");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.password, "secret");
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = User {
            id: 1,
            email: "alice@example.com".to_string(),
            name: "Alice".to_string(),
            password: "hunter2".to_string(),
            created_at: "2024-01-01 00:00:00".to_string(),
        };
        let debug = format!("{user:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));

        let debug = format!("{:?}", NewUser::new("a@b.c", "A", "hunter2"));
        assert!(!debug.contains("hunter2"));
    }
}
