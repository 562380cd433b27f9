//! # Store Traits
//!
//! What the engine needs from persistence. The SQLite repositories in
//! `menu-db` implement these; engine tests swap in in-process doubles.
//!
//! ## Contract
//! - Sequences come back ordered by id ascending. The offer pricing
//!   tie-break depends on it.
//! - `save` ignores the incoming id and returns the entity with the
//!   store-assigned one.
//! - Every failure is a [`DbError`]; callers never retry.

use async_trait::async_trait;
use chrono::NaiveDate;

use menu_core::{FoodItem, Money, Offer};
use menu_db::{DbError, FoodItemRepository, OfferRepository};

type StoreResult<T> = Result<T, DbError>;

#[async_trait]
pub trait FoodItemStore: Send + Sync {
    async fn save(&self, item: &FoodItem) -> StoreResult<FoodItem>;
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<FoodItem>>;
    async fn find_all(&self) -> StoreResult<Vec<FoodItem>>;
    /// Returns the number of items repriced.
    async fn update_price(&self, name: &str, price: Money) -> StoreResult<u64>;
    async fn delete_by_name(&self, name: &str) -> StoreResult<u64>;
    async fn delete_by_id(&self, id: i64) -> StoreResult<u64>;
}

#[async_trait]
pub trait OfferStore: Send + Sync {
    async fn save(&self, offer: &Offer) -> StoreResult<Offer>;
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Offer>>;
    async fn find_all(&self) -> StoreResult<Vec<Offer>>;
    async fn find_by_food_item_id(&self, food_item_id: i64) -> StoreResult<Vec<Offer>>;
    /// Offers flagged active whose window contains `today`.
    async fn find_active_offers(&self, today: NaiveDate) -> StoreResult<Vec<Offer>>;
    async fn update(&self, offer: &Offer) -> StoreResult<Offer>;
    async fn delete_by_id(&self, id: i64) -> StoreResult<u64>;
    async fn deactivate_by_id(&self, id: i64) -> StoreResult<u64>;
}

// =============================================================================
// SQLite implementations
// =============================================================================

#[async_trait]
impl FoodItemStore for FoodItemRepository {
    async fn save(&self, item: &FoodItem) -> StoreResult<FoodItem> {
        FoodItemRepository::save(self, item).await
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<FoodItem>> {
        FoodItemRepository::find_by_id(self, id).await
    }

    async fn find_all(&self) -> StoreResult<Vec<FoodItem>> {
        FoodItemRepository::find_all(self).await
    }

    async fn update_price(&self, name: &str, price: Money) -> StoreResult<u64> {
        FoodItemRepository::update_price(self, name, price).await
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<u64> {
        FoodItemRepository::delete_by_name(self, name).await
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<u64> {
        FoodItemRepository::delete_by_id(self, id).await
    }
}

#[async_trait]
impl OfferStore for OfferRepository {
    async fn save(&self, offer: &Offer) -> StoreResult<Offer> {
        OfferRepository::save(self, offer).await
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Offer>> {
        OfferRepository::find_by_id(self, id).await
    }

    async fn find_all(&self) -> StoreResult<Vec<Offer>> {
        OfferRepository::find_all(self).await
    }

    async fn find_by_food_item_id(&self, food_item_id: i64) -> StoreResult<Vec<Offer>> {
        OfferRepository::find_by_food_item_id(self, food_item_id).await
    }

    async fn find_active_offers(&self, today: NaiveDate) -> StoreResult<Vec<Offer>> {
        OfferRepository::find_active_offers(self, today).await
    }

    async fn update(&self, offer: &Offer) -> StoreResult<Offer> {
        OfferRepository::update(self, offer).await
    }

    async fn delete_by_id(&self, id: i64) -> StoreResult<u64> {
        OfferRepository::delete_by_id(self, id).await
    }

    async fn deactivate_by_id(&self, id: i64) -> StoreResult<u64> {
        OfferRepository::deactivate_by_id(self, id).await
    }
}
