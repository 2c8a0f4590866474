//! In-memory item store

use super::error::{StoreError, StoreResult};
use super::item::{Item, ItemPayload};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Collection guarded by the store's lock
struct Inner {
    /// Items in insertion order
    items: Vec<Item>,

    /// Next candidate for a generated id
    next_id: u64,
}

impl Inner {
    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Draw ids from the counter until one is unused.
    ///
    /// Items handed to `with_items` may already hold counter values, so every
    /// candidate is checked against the live collection. At most `len()`
    /// candidates can be rejected. The counter wraps past `u64::MAX`.
    fn next_free_id(&mut self) -> String {
        loop {
            let candidate = self.next_id.to_string();
            self.next_id = self.next_id.wrapping_add(1);

            if self.position(&candidate).is_none() {
                return candidate;
            }
            debug!("Skipping id {} (already taken)", candidate);
        }
    }
}

/// In-memory item store
///
/// A flat, ordered list behind a single exclusive lock. Every operation,
/// reads included, takes the same lock for the duration of its scan, so no
/// two operations ever overlap. Callers only ever get clones back.
pub struct ItemStore {
    inner: Mutex<Inner>,
}

impl ItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a store pre-populated with `items`, kept in the given order
    ///
    /// The id counter starts past the largest numeric id among them.
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max.wrapping_add(1));

        ItemStore {
            inner: Mutex::new(Inner { items, next_id }),
        }
    }

    // A panic while holding the lock cannot leave the Vec half-mutated,
    // so a poisoned guard is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every item in current order
    pub fn list(&self) -> Vec<Item> {
        self.lock().items.clone()
    }

    /// Get an item by id
    pub fn get(&self, id: &str) -> StoreResult<Item> {
        let inner = self.lock();
        inner
            .items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Store a new item under a freshly assigned id and return it
    pub fn insert(&self, payload: ItemPayload) -> Item {
        let mut inner = self.lock();
        let id = inner.next_free_id();
        let item = Item::from_payload(id, payload);
        inner.items.push(item.clone());
        debug!("Inserted item {}", item.id);
        item
    }

    /// Replace the name and description of an item in place
    pub fn update(&self, id: &str, payload: ItemPayload) -> StoreResult<Item> {
        let mut inner = self.lock();
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        item.apply(payload);
        debug!("Updated item {}", id);
        Ok(item.clone())
    }

    /// Remove an item, shifting later items left. Returns the removed item.
    pub fn delete(&self, id: &str) -> StoreResult<Item> {
        let mut inner = self.lock();
        let index = inner
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = inner.items.remove(index);
        debug!("Deleted item {}", id);
        Ok(removed)
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.lock().items.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get statistics about the store
    pub fn stats(&self) -> StoreStats {
        let inner = self.lock();
        StoreStats {
            items: inner.items.len(),
            item_bytes: inner.items.iter().map(Item::memory_usage).sum(),
        }
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the item store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub items: usize,
    pub item_bytes: usize,
}
