//! API handlers for the user and board services.

pub mod board;
pub mod user;

pub use board::*;
pub use user::*;

use crate::db::Database;
use crate::directory::HttpUserDirectory;

/// Shared state for the user service.
pub struct UserAppState {
    /// Users database.
    pub db: Database,
}

impl UserAppState {
    /// Create a new user service state.
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

/// Shared state for the board service.
///
/// Generic over the directory so routers can run against an in-process
/// directory in tests.
pub struct BoardAppState<D = HttpUserDirectory> {
    /// Boards database.
    pub db: Database,
    /// Client for author lookups.
    pub directory: D,
}

impl<D> BoardAppState<D> {
    /// Create a new board service state.
    pub fn new(db: Database, directory: D) -> Self {
        Self { db, directory }
    }
}
