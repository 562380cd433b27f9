//! # Catalog Cache
//!
//! Single-slot cache of the full food item list.
//!
//! ```text
//!   get() ──► Some(list) ─── hit
//!        └──► None ───────── miss, caller loads from the store and put()s
//!
//!   invalidate() ──► slot = None   (after every committed food item write)
//! ```
//!
//! There is one key, no TTL and no per-item entries. The slot is behind a
//! `tokio::sync::RwLock`, so each call sees either the old list or the new
//! one, never a torn value. A reader that loaded before a write and `put`s
//! after that write's `invalidate` can leave a stale list behind until the
//! next write. That window is accepted.

use tokio::sync::RwLock;
use tracing::debug;

use menu_core::FoodItem;

#[derive(Debug, Default)]
pub struct CatalogCache {
    all_items: RwLock<Option<Vec<FoodItem>>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the cached list, if any.
    pub async fn get(&self) -> Option<Vec<FoodItem>> {
        let slot = self.all_items.read().await;
        match slot.as_ref() {
            Some(items) => {
                debug!(count = items.len(), "Catalog cache hit");
                Some(items.clone())
            }
            None => {
                debug!("Catalog cache miss");
                None
            }
        }
    }

    /// Replaces the cached list.
    pub async fn put(&self, items: Vec<FoodItem>) {
        debug!(count = items.len(), "Catalog cache populated");
        *self.all_items.write().await = Some(items);
    }

    /// Clears the slot.
    pub async fn invalidate(&self) {
        debug!("Catalog cache invalidated");
        *self.all_items.write().await = None;
    }
}
