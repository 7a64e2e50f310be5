//! HTTP surface for the user and board services.
//!
//! Each service gets its own router and state; both share the error type,
//! DTOs and server wrapper defined here.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::{create_board_router, create_health_router, create_user_router};
pub use server::WebServer;
