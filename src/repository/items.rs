//! Items repository: the in-memory catalog

use std::collections::{BTreeMap, HashSet};

use crate::{
    error::{AppError, AppResult},
    models::item::{ItemId, LibraryItem, SeedItem},
};

/// Owns every catalog item, keyed and iterated by id
#[derive(Debug, Clone, Default)]
pub struct ItemsRepository {
    items: BTreeMap<ItemId, LibraryItem>,
}

impl ItemsRepository {
    /// Build the catalog from the startup seed list
    pub fn from_seed(seed: Vec<SeedItem>) -> AppResult<Self> {
        let mut seen = HashSet::new();
        let mut items = BTreeMap::new();

        for entry in seed {
            let id = entry.id();
            if id == 0 {
                return Err(AppError::Validation("Item id must be positive".to_string()));
            }
            if !seen.insert(id) {
                return Err(AppError::Validation(format!("Duplicate item id {} in seed", id)));
            }
            items.insert(id, LibraryItem::from(entry));
        }

        tracing::debug!("Catalog seeded with {} items", items.len());
        Ok(Self { items })
    }

    /// Get item by ID
    pub fn get_by_id(&self, id: ItemId) -> AppResult<&LibraryItem> {
        self.items.get(&id).ok_or(AppError::ItemNotFound(id))
    }

    pub(crate) fn get_by_id_mut(&mut self, id: ItemId) -> AppResult<&mut LibraryItem> {
        self.items.get_mut(&id).ok_or(AppError::ItemNotFound(id))
    }

    /// All items in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &LibraryItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
