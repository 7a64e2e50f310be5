//! Board module.
//!
//! This module owns discussion-board posts for the board service:
//! - The Post entity and the enriched read model
//! - The boards table schema
//! - Store access (`PostRepository`)
//! - The aggregation service that joins posts with author summaries
//!   fetched from the user directory at read time

mod post;
mod repository;
mod schema;
mod service;

pub use post::{EnrichedPost, NewPost, Post};
pub use repository::PostRepository;
pub use schema::MIGRATIONS;
pub use service::{BoardService, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH};
