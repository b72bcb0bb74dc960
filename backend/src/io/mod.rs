//! # IO Module
//!
//! The adapter layer between HTTP clients and the domain. It exposes the
//! REST endpoints, converts JSON to domain commands and back, and maps domain
//! errors to status codes.

pub mod rest;

pub use rest::*;
