//! userboard - a user service and a board service that enriches posts with
//! author data fetched from the user service at read time.
//!
//! Author lookups fail open: when the user service is slow, down or returns
//! garbage, board reads still succeed with the author left empty.

pub mod board;
pub mod config;
pub mod db;
pub mod directory;
pub mod error;
pub mod logging;
pub mod user;
pub mod web;

pub use board::{BoardService, EnrichedPost, NewPost, Post};
pub use config::Config;
pub use db::Database;
pub use directory::{HttpUserDirectory, Lookup, UserDirectory, UserSummary};
pub use error::{Result, UserboardError};
pub use user::{NewUser, User, UserService};
pub use web::WebServer;
