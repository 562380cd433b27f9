//! # Catalog Service
//!
//! Reads and writes food items through the store, keeping the
//! [`CatalogCache`] coherent.
//!
//! ## Write Path
//! ```text
//! add / update_price / delete
//!      │
//!      ├── validate ───────────► Err: store and cache untouched
//!      │
//!      ├── store write ────────► Err: cache untouched
//!      │
//!      └── cache.invalidate()
//!           │
//!           ▼
//!      return Ok  ── the next get_all_food_items() reloads from the store
//! ```
//!
//! ## Read Paths
//! | Operation                            | Cache                 |
//! |--------------------------------------|-----------------------|
//! | `get_all_food_items`                 | read-through          |
//! | `get_all_food_items_sorted_by_name`  | bypassed, never filled|
//! | `get_food_item_by_id`                | bypassed              |

use std::sync::Arc;
use tracing::info;

use menu_core::validation::{
    validate_food_item, validate_id, validate_price_cents, validate_required,
};
use menu_core::{CoreError, FoodItem, Money};

use crate::cache::CatalogCache;
use crate::error::EngineResult;
use crate::store::FoodItemStore;

/// Food item operations backed by a store and the catalog cache.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn FoodItemStore>,
    cache: Arc<CatalogCache>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn FoodItemStore>, cache: Arc<CatalogCache>) -> Self {
        CatalogService { store, cache }
    }

    /// Every food item, ordered by id. Served from the cache when filled.
    pub async fn get_all_food_items(&self) -> EngineResult<Vec<FoodItem>> {
        if let Some(items) = self.cache.get().await {
            return Ok(items);
        }

        let items = self.store.find_all().await?;
        self.cache.put(items.clone()).await;
        Ok(items)
    }

    /// Every food item, sorted by name ignoring case. Always reads the store.
    pub async fn get_all_food_items_sorted_by_name(&self) -> EngineResult<Vec<FoodItem>> {
        let mut items = self.store.find_all().await?;
        items.sort_by_cached_key(|item| item.name.to_lowercase());
        Ok(items)
    }

    /// Validates and stores a new item. Returns it with its assigned id.
    pub async fn add_food_item(&self, item: FoodItem) -> EngineResult<FoodItem> {
        validate_food_item(&item)?;

        let saved = self.store.save(&item).await?;
        self.cache.invalidate().await;

        info!(id = saved.id, name = %saved.name, "Food item added");
        Ok(saved)
    }

    /// Reprices every item called `name`. Returns how many were changed.
    ///
    /// The name is only matched, so any string is accepted.
    pub async fn update_price(&self, name: &str, price: Money) -> EngineResult<u64> {
        validate_price_cents(price.cents())?;

        let changed = self.store.update_price(name, price).await?;
        self.cache.invalidate().await;

        info!(name = %name, price = %price, changed, "Food item price updated");
        Ok(changed)
    }

    /// Deletes every item called `name`, with their offers.
    pub async fn delete_food_item(&self, name: &str) -> EngineResult<u64> {
        validate_required("name", name)?;

        let deleted = self.store.delete_by_name(name).await?;
        self.cache.invalidate().await;

        info!(name = %name, deleted, "Food item deleted by name");
        Ok(deleted)
    }

    /// Deletes one item by id, with its offers.
    pub async fn delete_food_item_by_id(&self, id: i64) -> EngineResult<u64> {
        validate_id("id", id)?;

        let deleted = self.store.delete_by_id(id).await?;
        self.cache.invalidate().await;

        info!(id, deleted, "Food item deleted");
        Ok(deleted)
    }

    /// Looks one item up in the store.
    ///
    /// ## Errors
    /// * `FoodItemNotFound` - no item with this id
    pub async fn get_food_item_by_id(&self, id: i64) -> EngineResult<FoodItem> {
        validate_id("id", id)?;

        let item = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::FoodItemNotFound(id))?;
        Ok(item)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
