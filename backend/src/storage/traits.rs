//! # Storage Traits
//!
//! This module defines the storage abstraction that lets the domain layer work
//! with any item repository. The endpoint contract does not change if the
//! linear in-memory store is replaced by an indexed one.

use anyhow::Result;

use crate::domain::models::item::{Item, ItemDraft};

/// Trait defining the interface for item storage operations
///
/// Implementations own id assignment: ids start at 1, grow by one per
/// `create`, and are never reused, even after `delete`. Mutations must be
/// serialized with respect to each other.
pub trait ItemStorage: Send + Sync {
    /// List all items in insertion order
    fn list(&self) -> Result<Vec<Item>>;

    /// Retrieve a specific item by ID
    fn get(&self, id: i64) -> Result<Option<Item>>;

    /// Store a new item under the next unused id and return it
    fn create(&self, draft: ItemDraft) -> Result<Item>;

    /// Replace all mutable fields of an existing item
    /// Returns `None` without touching the collection if the id is unknown
    fn update(&self, id: i64, draft: ItemDraft) -> Result<Option<Item>>;

    /// Delete a single item
    /// Returns true if the item was found and deleted, false otherwise
    fn delete(&self, id: i64) -> Result<bool>;

    /// Number of stored items
    fn len(&self) -> Result<usize>;
}
