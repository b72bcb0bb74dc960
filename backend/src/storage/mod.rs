//! # Storage Module
//!
//! Holds the item repository behind the [`ItemStorage`] trait. The only
//! backend today is the process-local [`memory::InMemoryItemRepository`];
//! nothing here survives a restart.

pub mod memory;
pub mod traits;

pub use memory::InMemoryItemRepository;
pub use traits::ItemStorage;
