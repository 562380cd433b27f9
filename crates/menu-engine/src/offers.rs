//! # Offer Engine
//!
//! Validation, lifecycle and pricing of offers.
//!
//! ## Offer Lifecycle
//! ```text
//!               add_offer
//!    (validate, food item must exist)
//!                  │
//!                  ▼
//!     ┌────────────────────────┐   update_offer / patch_offer
//!     │   stored, is_active    │◄──────────────┐ (full re-validation)
//!     └───────────┬────────────┘───────────────┘
//!                 │ deactivate_offer (idempotent, one-way)
//!                 ▼
//!     ┌────────────────────────┐
//!     │  stored, not active    │
//!     └───────────┬────────────┘
//!                 │ delete_offer (from either state)
//!                 ▼
//!              removed
//! ```
//!
//! Offers do not touch the catalog cache.
//!
//! ## Pricing
//! `get_discounted_price` loads the active offers (id order) and prices
//! against the first one for the item. See [`menu_core::offer::first_match_price`].

use std::sync::Arc;
use tracing::{debug, info};

use menu_core::offer::first_match_price;
use menu_core::validation::{validate_id, validate_offer};
use menu_core::{CoreError, Money, Offer, OfferPatch};

use crate::clock::Clock;
use crate::error::EngineResult;
use crate::store::{FoodItemStore, OfferStore};

/// Offer operations. The food item store is only used to check that a
/// referenced item exists.
#[derive(Clone)]
pub struct OfferEngine {
    offers: Arc<dyn OfferStore>,
    food_items: Arc<dyn FoodItemStore>,
    clock: Arc<dyn Clock>,
}

impl OfferEngine {
    pub fn new(
        offers: Arc<dyn OfferStore>,
        food_items: Arc<dyn FoodItemStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        OfferEngine {
            offers,
            food_items,
            clock,
        }
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Validates and stores a new offer. Returns it with its assigned id.
    ///
    /// ## Errors
    /// * Validation - any offer invariant fails
    /// * `FoodItemNotFound` - `food_item_id` does not resolve; nothing is stored
    pub async fn add_offer(&self, offer: Offer) -> EngineResult<Offer> {
        validate_offer(&offer)?;
        self.ensure_food_item(offer.food_item_id).await?;

        let saved = self.offers.save(&offer).await?;

        info!(
            id = saved.id,
            food_item_id = saved.food_item_id,
            discount = saved.discount_percentage,
            "Offer added"
        );
        Ok(saved)
    }

    /// Replaces every field of a stored offer.
    ///
    /// ## Errors
    /// * Validation - `offer.id <= 0` or any offer invariant fails
    /// * `OfferNotFound` - no stored offer with `offer.id`
    /// * `FoodItemNotFound` - the offer is moved to an item that does not exist
    pub async fn update_offer(&self, offer: Offer) -> EngineResult<Offer> {
        validate_id("id", offer.id)?;
        validate_offer(&offer)?;
        let existing = self.get_offer_by_id(offer.id).await?;

        if offer.food_item_id != existing.food_item_id {
            self.ensure_food_item(offer.food_item_id).await?;
        }

        let updated = self.offers.update(&offer).await?;

        info!(id = updated.id, "Offer updated");
        Ok(updated)
    }

    /// Overlays the given fields on the stored offer, then updates it.
    pub async fn patch_offer(&self, id: i64, patch: OfferPatch) -> EngineResult<Offer> {
        let existing = self.get_offer_by_id(id).await?;

        if patch.is_empty() {
            debug!(id, "Empty offer patch, nothing to do");
            return Ok(existing);
        }

        self.update_offer(patch.apply_to(&existing)).await
    }

    /// Deletes an offer permanently.
    pub async fn delete_offer(&self, id: i64) -> EngineResult<()> {
        self.get_offer_by_id(id).await?;
        self.offers.delete_by_id(id).await?;

        info!(id, "Offer deleted");
        Ok(())
    }

    /// Switches an offer off. Deactivating an inactive offer succeeds.
    pub async fn deactivate_offer(&self, id: i64) -> EngineResult<()> {
        let existing = self.get_offer_by_id(id).await?;

        if !existing.is_active {
            debug!(id, "Offer already inactive");
        }
        self.offers.deactivate_by_id(id).await?;

        info!(id, "Offer deactivated");
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Every offer, ordered by id.
    pub async fn get_all_offers(&self) -> EngineResult<Vec<Offer>> {
        Ok(self.offers.find_all().await?)
    }

    /// Offers of one food item, ordered by id.
    pub async fn get_offers_by_food_item(&self, food_item_id: i64) -> EngineResult<Vec<Offer>> {
        validate_id("food_item_id", food_item_id)?;
        Ok(self.offers.find_by_food_item_id(food_item_id).await?)
    }

    /// Offers in effect today, ordered by id.
    ///
    /// The store pre-filters on flag and window; the result is then checked
    /// against [`Offer::is_currently_active`] so every caller shares one rule.
    pub async fn get_active_offers(&self) -> EngineResult<Vec<Offer>> {
        let today = self.clock.today();
        let mut offers = self.offers.find_active_offers(today).await?;
        offers.retain(|offer| offer.is_currently_active(today));

        debug!(count = offers.len(), today = %today, "Active offers");
        Ok(offers)
    }

    /// ## Errors
    /// * Validation - `id <= 0`
    /// * `OfferNotFound` - no offer with this id
    pub async fn get_offer_by_id(&self, id: i64) -> EngineResult<Offer> {
        validate_id("id", id)?;

        let offer = self
            .offers
            .find_by_id(id)
            .await?
            .ok_or(CoreError::OfferNotFound(id))?;
        Ok(offer)
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Prices `original` against the first active offer for the item, or
    /// returns it unchanged.
    pub async fn get_discounted_price(
        &self,
        food_item_id: i64,
        original: Money,
    ) -> EngineResult<Money> {
        let today = self.clock.today();
        let active = self.get_active_offers().await?;
        Ok(first_match_price(&active, food_item_id, original, today))
    }

    /// Looks the item up and prices it. Returns `(original, discounted)`.
    pub async fn get_discounted_price_for_item(
        &self,
        food_item_id: i64,
    ) -> EngineResult<(Money, Money)> {
        validate_id("food_item_id", food_item_id)?;

        let item = self
            .food_items
            .find_by_id(food_item_id)
            .await?
            .ok_or(CoreError::FoodItemNotFound(food_item_id))?;

        let original = item.price();
        let discounted = self.get_discounted_price(item.id, original).await?;
        Ok((original, discounted))
    }

    async fn ensure_food_item(&self, food_item_id: i64) -> EngineResult<()> {
        if self.food_items.find_by_id(food_item_id).await?.is_none() {
            return Err(CoreError::FoodItemNotFound(food_item_id).into());
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;
    use menu_core::{FoodItem, ValidationError};
    use menu_db::{Database, DbConfig, DbError};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine_on(db: &Database, today: NaiveDate) -> OfferEngine {
        OfferEngine::new(
            Arc::new(db.offers()),
            Arc::new(db.food_items()),
            Arc::new(FixedClock(today)),
        )
    }

    /// Database with "Pizza" ($10.50) as food item 1.
    async fn setup() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let pizza = db
            .food_items()
            .save(&FoodItem::meal("Pizza", Money::from_cents(1050)))
            .await
            .unwrap();
        assert_eq!(pizza.id, 1);
        db
    }

    fn year_offer(pct: f64) -> Offer {
        Offer::new(1, pct, None, date(2024, 1, 1), date(2024, 12, 31))
    }

    #[tokio::test]
    async fn test_pizza_scenario() {
        let db = setup().await;
        let inside = engine_on(&db, date(2024, 6, 15));
        let outside = engine_on(&db, date(2025, 1, 1));

        let offer = inside.add_offer(year_offer(20.0)).await.unwrap();

        let price = Money::from_cents(1050);
        assert_eq!(inside.get_discounted_price(1, price).await.unwrap().cents(), 840);
        assert_eq!(outside.get_discounted_price(1, price).await.unwrap().cents(), 1050);

        inside.deactivate_offer(offer.id).await.unwrap();
        assert_eq!(inside.get_discounted_price(1, price).await.unwrap().cents(), 1050);
    }

    #[tokio::test]
    async fn test_percentage_boundaries() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));

        for pct in [0.0, 100.0001, -5.0, f64::NAN] {
            let err = engine.add_offer(year_offer(pct)).await.unwrap_err();
            assert!(err.is_validation(), "{pct} should be rejected");
        }
        for pct in [100.0, 0.0001] {
            assert!(engine.add_offer(year_offer(pct)).await.is_ok(), "{pct} should pass");
        }

        assert_eq!(engine.get_all_offers().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_end_before_start_rejected() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));

        let offer = Offer::new(1, 10.0, None, date(2024, 2, 1), date(2024, 1, 31));
        let err = engine.add_offer(offer).await.unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::Core(CoreError::Validation(ValidationError::EndBeforeStart { .. }))
        ));
    }

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));

        let mut offer = year_offer(12.5);
        offer.description = Some("Summer".to_string());
        let saved = engine.add_offer(offer.clone()).await.unwrap();

        let loaded = engine.get_offer_by_id(saved.id).await.unwrap();
        offer.id = saved.id;
        assert_eq!(loaded, offer);
    }

    #[tokio::test]
    async fn test_unknown_food_item_persists_nothing() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));

        let mut offer = year_offer(20.0);
        offer.food_item_id = 99;
        let err = engine.add_offer(offer).await.unwrap_err();

        assert!(err.is_not_found());
        assert!(err.is_validation());
        assert!(engine.get_all_offers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_first_active_offer_wins() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));

        engine.add_offer(year_offer(10.0)).await.unwrap();
        engine.add_offer(year_offer(50.0)).await.unwrap();

        let price = engine
            .get_discounted_price(1, Money::from_cents(1000))
            .await
            .unwrap();
        assert_eq!(price.cents(), 900);
    }

    #[tokio::test]
    async fn test_active_offers_respect_window_and_flag() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));

        let running = engine.add_offer(year_offer(10.0)).await.unwrap();
        engine
            .add_offer(Offer::new(1, 20.0, None, date(2024, 7, 1), date(2024, 7, 31)))
            .await
            .unwrap();
        let stopped = engine.add_offer(year_offer(30.0)).await.unwrap();
        engine.deactivate_offer(stopped.id).await.unwrap();

        let active = engine.get_active_offers().await.unwrap();
        assert_eq!(active, vec![running]);
    }

    #[tokio::test]
    async fn test_deactivate_is_idempotent() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));
        let offer = engine.add_offer(year_offer(20.0)).await.unwrap();

        engine.deactivate_offer(offer.id).await.unwrap();
        engine.deactivate_offer(offer.id).await.unwrap();

        let stored = engine.get_offer_by_id(offer.id).await.unwrap();
        assert!(!stored.is_active);
        assert!(!stored.is_currently_active(date(2024, 6, 15)));
    }

    #[tokio::test]
    async fn test_missing_ids() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));

        for id in [0, -1] {
            let err = engine.get_offer_by_id(id).await.unwrap_err();
            assert!(err.is_validation() && !err.is_not_found());
        }
        assert!(engine.get_offer_by_id(7).await.unwrap_err().is_not_found());
        assert!(engine.delete_offer(7).await.unwrap_err().is_not_found());
        assert!(engine.deactivate_offer(7).await.unwrap_err().is_not_found());
        assert!(engine
            .get_offers_by_food_item(0)
            .await
            .unwrap_err()
            .is_validation());

        let mut ghost = year_offer(20.0);
        ghost.id = 7;
        assert!(engine.update_offer(ghost).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_revalidates() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));
        let mut offer = engine.add_offer(year_offer(20.0)).await.unwrap();

        offer.discount_percentage = 150.0;
        assert!(engine.update_offer(offer.clone()).await.unwrap_err().is_validation());

        offer.discount_percentage = 35.0;
        engine.update_offer(offer.clone()).await.unwrap();
        assert_eq!(engine.get_offer_by_id(offer.id).await.unwrap(), offer);

        offer.food_item_id = 42;
        assert!(engine.update_offer(offer).await.unwrap_err().is_not_found());
    }

    /// Offer store whose every call fails, as when the pool is gone.
    struct UnavailableOfferStore;

    #[async_trait::async_trait]
    impl OfferStore for UnavailableOfferStore {
        async fn save(&self, _: &Offer) -> Result<Offer, DbError> {
            Err(DbError::PoolExhausted)
        }
        async fn find_by_id(&self, _: i64) -> Result<Option<Offer>, DbError> {
            Err(DbError::PoolExhausted)
        }
        async fn find_all(&self) -> Result<Vec<Offer>, DbError> {
            Err(DbError::PoolExhausted)
        }
        async fn find_by_food_item_id(&self, _: i64) -> Result<Vec<Offer>, DbError> {
            Err(DbError::PoolExhausted)
        }
        async fn find_active_offers(&self, _: NaiveDate) -> Result<Vec<Offer>, DbError> {
            Err(DbError::PoolExhausted)
        }
        async fn update(&self, _: &Offer) -> Result<Offer, DbError> {
            Err(DbError::PoolExhausted)
        }
        async fn delete_by_id(&self, _: i64) -> Result<u64, DbError> {
            Err(DbError::PoolExhausted)
        }
        async fn deactivate_by_id(&self, _: i64) -> Result<u64, DbError> {
            Err(DbError::PoolExhausted)
        }
    }

    #[tokio::test]
    async fn test_update_validates_before_store() {
        let db = setup().await;
        let engine = OfferEngine::new(
            Arc::new(UnavailableOfferStore),
            Arc::new(db.food_items()),
            Arc::new(FixedClock(date(2024, 6, 15))),
        );

        let mut offer = year_offer(150.0);
        offer.id = 5;
        let err = engine.update_offer(offer).await.unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::Core(CoreError::Validation(
                ValidationError::PercentageOutOfRange { .. }
            ))
        ));

        let mut offer = year_offer(20.0);
        offer.id = 0;
        assert!(engine.update_offer(offer).await.unwrap_err().is_validation());

        // Valid input does reach the store and surfaces its failure.
        let mut offer = year_offer(20.0);
        offer.id = 5;
        assert!(matches!(
            engine.update_offer(offer).await.unwrap_err(),
            crate::EngineError::Storage(DbError::PoolExhausted)
        ));
    }

    #[tokio::test]
    async fn test_patch_keeps_unspecified_fields() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));
        let mut offer = year_offer(20.0);
        offer.description = Some("Launch".to_string());
        let saved = engine.add_offer(offer).await.unwrap();

        let patched = engine
            .patch_offer(
                saved.id,
                OfferPatch {
                    end_date: Some(date(2024, 8, 31)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(patched.discount_percentage, 20.0);
        assert_eq!(patched.description.as_deref(), Some("Launch"));
        assert_eq!(patched.end_date, date(2024, 8, 31));

        let bad = OfferPatch {
            end_date: Some(date(2023, 12, 31)),
            ..Default::default()
        };
        assert!(engine.patch_offer(saved.id, bad).await.unwrap_err().is_validation());
    }

    #[tokio::test]
    async fn test_delete_offer() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));
        let offer = engine.add_offer(year_offer(20.0)).await.unwrap();

        engine.delete_offer(offer.id).await.unwrap();
        assert!(engine.get_offer_by_id(offer.id).await.unwrap_err().is_not_found());
        assert!(engine.get_offers_by_food_item(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discounted_price_for_item() {
        let db = setup().await;
        let engine = engine_on(&db, date(2024, 6, 15));
        engine.add_offer(year_offer(20.0)).await.unwrap();

        let (original, discounted) = engine.get_discounted_price_for_item(1).await.unwrap();
        assert_eq!(original.cents(), 1050);
        assert_eq!(discounted.cents(), 840);

        assert!(engine
            .get_discounted_price_for_item(2)
            .await
            .unwrap_err()
            .is_not_found());
    }
}
