//! User directory client.
//!
//! The board service has no copy of user data. It resolves post authors at
//! read time through a [`UserDirectory`], which turns user IDs into
//! [`UserSummary`] values. A directory never reports transport failures to
//! its caller: every lookup ends in a [`Lookup`], and [`Lookup::Absent`]
//! is an ordinary outcome the caller must handle.

mod http;

use std::future::Future;

use serde::{Deserialize, Serialize};

pub use http::HttpUserDirectory;

/// Outcome of a directory lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The directory answered with data.
    Found(T),
    /// No data: the user service was unreachable, slow, answered with an
    /// error or an unreadable body, or (for single lookups) did not know the
    /// user. These cases are not distinguished.
    Absent,
}

impl<T> Lookup<T> {
    /// Convert into an `Option`.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Absent => None,
        }
    }

    /// Whether the lookup produced data.
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Return the data, or `T::default()` when absent.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.found().unwrap_or_default()
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::Absent,
        }
    }
}

/// Read-only projection of a user as returned by the user service.
///
/// Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User ID.
    pub user_id: i64,
    /// Display name.
    pub name: String,
    /// Email address, when the user service includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserSummary {
    /// Create a summary without an email address.
    pub fn new(user_id: i64, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            email: None,
        }
    }
}

/// Source of user summaries for author enrichment.
pub trait UserDirectory: Send + Sync {
    /// Resolve a set of user IDs in one batch.
    ///
    /// The caller removes duplicates beforehand. The returned summaries may
    /// be fewer than the requested IDs; unknown IDs are simply missing.
    fn fetch_many(&self, ids: &[i64]) -> impl Future<Output = Lookup<Vec<UserSummary>>> + Send;

    /// Resolve a single user ID.
    fn fetch_one(&self, id: i64) -> impl Future<Output = Lookup<UserSummary>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_found() {
        let lookup = Lookup::Found(vec![UserSummary::new(1, "Alice")]);
        assert!(lookup.is_found());
        assert_eq!(lookup.found().unwrap().len(), 1);
    }

    #[test]
    fn test_lookup_absent_defaults() {
        let lookup: Lookup<Vec<UserSummary>> = Lookup::Absent;
        assert!(!lookup.is_found());
        assert!(lookup.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_lookup_from_option() {
        assert_eq!(Lookup::from(Some(3)), Lookup::Found(3));
        assert_eq!(Lookup::<i32>::from(None), Lookup::Absent);
    }

    #[test]
    fn test_user_summary_deserializes_user_service_shape() {
        let json = r#"{"userId": 10, "email": "alice@example.com", "name": "Alice"}"#;
        let summary: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.user_id, 10);
        assert_eq!(summary.name, "Alice");
        assert_eq!(summary.email.as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn test_user_summary_email_optional() {
        let summary: UserSummary = serde_json::from_str(r#"{"userId": 3, "name": "Bo"}"#).unwrap();
        assert_eq!(summary, UserSummary::new(3, "Bo"));

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_user_summary_ignores_unknown_fields() {
        let json = r#"{"userId": 3, "name": "Bo", "password": "x", "extra": true}"#;
        let summary: UserSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.user_id, 3);
    }
}
