//! In-memory item repository.
//!
//! Items live in a `Vec` guarded by a single mutex together with the id
//! counter, so id assignment and the append happen atomically.

use anyhow::{anyhow, Result};
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

use crate::domain::models::item::{Item, ItemDraft};
use crate::storage::traits::ItemStorage;

const FIRST_ID: i64 = 1;

struct ItemTable {
    items: Vec<Item>,
    next_id: i64,
}

/// Process-local item store. State is lost when the process exits.
pub struct InMemoryItemRepository {
    table: Mutex<ItemTable>,
}

impl InMemoryItemRepository {
    /// Create an empty repository with the id counter at 1
    pub fn new() -> Self {
        Self {
            table: Mutex::new(ItemTable {
                items: Vec::new(),
                next_id: FIRST_ID,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ItemTable>> {
        self.table
            .lock()
            .map_err(|_| anyhow!("item table lock poisoned"))
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStorage for InMemoryItemRepository {
    fn list(&self) -> Result<Vec<Item>> {
        Ok(self.lock()?.items.clone())
    }

    fn get(&self, id: i64) -> Result<Option<Item>> {
        let table = self.lock()?;
        Ok(table.items.iter().find(|item| item.id == id).cloned())
    }

    fn create(&self, draft: ItemDraft) -> Result<Item> {
        let mut table = self.lock()?;
        let item = draft.into_item(table.next_id);
        table.items.push(item.clone());
        table.next_id += 1;
        debug!("Stored item {} (next id {})", item.id, table.next_id);
        Ok(item)
    }

    fn update(&self, id: i64, draft: ItemDraft) -> Result<Option<Item>> {
        let mut table = self.lock()?;
        match table.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.replace_with(draft);
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let mut table = self.lock()?;
        let before = table.items.len();
        table.items.retain(|item| item.id != id);
        Ok(table.items.len() != before)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.lock()?.items.len())
    }
}
