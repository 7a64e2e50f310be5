//! User module.
//!
//! This module owns user accounts for the user service:
//! - The User entity and its creation data
//! - The users table schema
//! - Store access (`UserRepository`) and sign-up/lookup logic (`UserService`)

mod model;
mod repository;
mod schema;
mod service;

pub use model::{NewUser, User};
pub use repository::UserRepository;
pub use schema::MIGRATIONS;
pub use service::{UserService, MAX_NAME_LENGTH};
