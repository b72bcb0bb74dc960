//! # Domain Module
//!
//! Business logic for the item tracker. The domain layer is independent of
//! HTTP: it receives commands, talks to an [`ItemStorage`](crate::storage::ItemStorage)
//! implementation, and reports a missing item as [`ItemError::NotFound`].

pub mod commands;
pub mod item_service;
pub mod models;

pub use item_service::*;
