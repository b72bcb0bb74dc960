use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::commands::items::{CreateItemCommand, UpdateItemCommand};
use crate::domain::models::item::{Item, ItemDraft};
use crate::storage::ItemStorage;

/// Errors surfaced by [`ItemService`]
#[derive(Debug, Error)]
pub enum ItemError {
    /// No item has the requested id
    #[error("Item not found: {id}")]
    NotFound { id: i64 },

    /// The underlying store failed; never caused by caller input
    #[error("storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

pub type ItemResult<T> = std::result::Result<T, ItemError>;

/// Service for managing items
#[derive(Clone)]
pub struct ItemService {
    storage: Arc<dyn ItemStorage>,
}

impl ItemService {
    /// Create a new ItemService on top of the given repository
    pub fn new(storage: Arc<dyn ItemStorage>) -> Self {
        Self { storage }
    }

    /// List all items in insertion order
    pub fn list_items(&self) -> ItemResult<Vec<Item>> {
        let items = self.storage.list()?;
        info!("Found {} items", items.len());
        Ok(items)
    }

    /// Get an item by ID
    pub fn get_item(&self, item_id: i64) -> ItemResult<Item> {
        match self.storage.get(item_id)? {
            Some(item) => Ok(item),
            None => {
                warn!("Item not found: {}", item_id);
                Err(ItemError::NotFound { id: item_id })
            }
        }
    }

    /// Create a new item; the repository assigns its id
    pub fn create_item(&self, command: CreateItemCommand) -> ItemResult<Item> {
        info!("Creating item: name={}", command.name);

        let item = self.storage.create(ItemDraft::from(command))?;

        info!(
            "Created item {} with ID: {} ({} stored)",
            item.name,
            item.id,
            self.storage.len()?
        );
        Ok(item)
    }

    /// Replace every mutable field of an existing item
    pub fn update_item(&self, command: UpdateItemCommand) -> ItemResult<Item> {
        let (item_id, draft) = command.into_parts();
        info!("Updating item: {}", item_id);

        match self.storage.update(item_id, draft)? {
            Some(item) => {
                info!("Updated item {} with ID: {}", item.name, item.id);
                Ok(item)
            }
            None => {
                warn!("Cannot update missing item: {}", item_id);
                Err(ItemError::NotFound { id: item_id })
            }
        }
    }

    /// Delete an item
    pub fn delete_item(&self, item_id: i64) -> ItemResult<()> {
        info!("Deleting item: {}", item_id);

        if self.storage.delete(item_id)? {
            info!("Deleted item with ID: {}", item_id);
            Ok(())
        } else {
            warn!("Cannot delete missing item: {}", item_id);
            Err(ItemError::NotFound { id: item_id })
        }
    }
}
