//! User repository.
//!
//! This module provides store operations for users in the database.

use std::collections::BTreeSet;

use sqlx::{QueryBuilder, Sqlite};

use super::model::{NewUser, User};
use crate::db::DbPool;
use crate::Result;

const USER_COLUMNS: &str = "id, email, name, password, created_at";

/// Maximum IDs bound into a single `IN (...)` query.
const LIST_BY_IDS_CHUNK: usize = 500;

/// Repository for user store operations.
pub struct UserRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new user inside a local transaction.
    ///
    /// Returns the created user with the assigned ID.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let mut tx = self.pool.begin().await?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (email, name, password) VALUES ($1, $2, $3) RETURNING {USER_COLUMNS}"
        ))
        .bind(&new_user.email)
        .bind(&new_user.name)
        .bind(&new_user.password)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(user)
    }

    /// Get a user by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// List all users, ordered by ID.
    pub async fn list_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// List the users whose IDs appear in `ids`, ordered by ID.
    ///
    /// Unknown IDs are skipped and duplicates collapse to one row. Large ID
    /// sets are queried in chunks of `LIST_BY_IDS_CHUNK` to stay under
    /// SQLite's bound-variable limit.
    pub async fn list_by_ids(&self, ids: &[i64]) -> Result<Vec<User>> {
        let distinct: Vec<i64> = ids
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut users = Vec::new();
        for chunk in distinct.chunks(LIST_BY_IDS_CHUNK) {
            let mut query: QueryBuilder<Sqlite> =
                QueryBuilder::new(format!("SELECT {USER_COLUMNS} FROM users WHERE id IN ("));
            let mut separated = query.separated(", ");
            for id in chunk {
                separated.push_bind(*id);
            }
            separated.push_unseparated(") ORDER BY id");

            users.extend(query.build_query_as::<User>().fetch_all(self.pool).await?);
        }

        Ok(users)
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
