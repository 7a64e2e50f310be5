//! Data Transfer Objects for the HTTP services.
//!
//! Field names are camelCase on the wire.

pub mod request;
pub mod response;
pub mod validation;

pub use request::*;
pub use response::*;
pub use validation::{ApiPath, ValidatedJson};
