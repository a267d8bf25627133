//! In-process catalog store.
//!
//! # Invariants
//! - Ids come from a monotonic counter that starts above every seeded id,
//!   so an id is never handed out twice.
//! - Insertion order is preserved; updates replace in place.

use crate::model::catalog_item::{CatalogItem, CatalogItemFields, CatalogItemId};
use crate::repo::catalog_store::{CatalogStore, StoreError, StoreMode, StoreResult};
use crate::repo::sample_data::sample_catalog;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};

struct MemoryState {
    items: Vec<CatalogItem>,
    next_id: CatalogItemId,
}

/// Catalog store backed by an in-memory list.
pub struct InMemoryCatalogStore {
    state: Mutex<MemoryState>,
}

impl InMemoryCatalogStore {
    /// Creates a store seeded with `items`.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(MemoryState { items, next_id }),
        }
    }

    /// Creates a store seeded with the built-in sample catalog.
    pub fn with_sample_data() -> Self {
        Self::new(sample_catalog())
    }

    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().items.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        // Writers never panic between mutations of `items` and `next_id`.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    fn mode(&self) -> StoreMode {
        StoreMode::Local
    }

    async fn list(&self) -> StoreResult<Vec<CatalogItem>> {
        Ok(self.lock().items.clone())
    }

    async fn create(&self, fields: &CatalogItemFields) -> StoreResult<CatalogItem> {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;

        let item = CatalogItem::from_fields(id, fields.clone());
        state.items.push(item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: CatalogItemId,
        fields: &CatalogItemFields,
    ) -> StoreResult<CatalogItem> {
        let mut state = self.lock();
        let Some(slot) = state.items.iter_mut().find(|item| item.id == id) else {
            return Err(StoreError::NotFound(id));
        };

        *slot = CatalogItem::from_fields(id, fields.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: CatalogItemId) -> StoreResult<()> {
        self.lock().items.retain(|item| item.id != id);
        Ok(())
    }
}
