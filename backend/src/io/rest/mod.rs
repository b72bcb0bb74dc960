//! # REST API Interface Layer
//!
//! Provides the HTTP endpoints for the item tracker. This layer handles:
//! - JSON request decoding and schema validation
//! - Error translation from domain outcomes to HTTP status codes
//! - Request logging
//!
//! It holds no business logic; every operation is delegated to
//! [`ItemService`](crate::domain::ItemService).

pub mod error;
pub mod item_apis;
pub mod mappers;
pub mod validation;

pub use error::ApiError;
pub use item_apis::*;
