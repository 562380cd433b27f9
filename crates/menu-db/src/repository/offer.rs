//! # Offer Repository
//!
//! Database operations for offers.
//!
//! Dates are stored as ISO `YYYY-MM-DD` text, so lexical comparison in SQL
//! matches calendar order. The active query relies on that.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use menu_core::Offer;

const OFFER_COLUMNS: &str =
    "id, food_item_id, discount_percentage, description, start_date, end_date, is_active";

/// Repository for offer database operations.
#[derive(Debug, Clone)]
pub struct OfferRepository {
    pool: SqlitePool,
}

impl OfferRepository {
    /// Creates a new OfferRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OfferRepository { pool }
    }

    /// Inserts an offer and returns it with the assigned id.
    ///
    /// ## Errors
    /// * `DbError::ForeignKeyViolation` - the food item does not exist
    pub async fn save(&self, offer: &Offer) -> DbResult<Offer> {
        debug!(
            food_item_id = offer.food_item_id,
            discount = offer.discount_percentage,
            "Inserting offer"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO offers (
                food_item_id, discount_percentage, description,
                start_date, end_date, is_active
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(offer.food_item_id)
        .bind(offer.discount_percentage)
        .bind(&offer.description)
        .bind(offer.start_date)
        .bind(offer.end_date)
        .bind(offer.is_active)
        .execute(&self.pool)
        .await?;

        let mut saved = offer.clone();
        saved.id = result.last_insert_rowid();

        debug!(id = saved.id, "Offer inserted");
        Ok(saved)
    }

    /// Lists every offer, ordered by id.
    pub async fn find_all(&self) -> DbResult<Vec<Offer>> {
        let sql = format!("SELECT {OFFER_COLUMNS} FROM offers ORDER BY id");
        let offers = sqlx::query_as::<_, Offer>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(offers)
    }

    /// Gets an offer by id.
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<Offer>> {
        let sql = format!("SELECT {OFFER_COLUMNS} FROM offers WHERE id = ?1");
        let offer = sqlx::query_as::<_, Offer>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(offer)
    }

    /// Lists the offers of one food item, ordered by id.
    pub async fn find_by_food_item_id(&self, food_item_id: i64) -> DbResult<Vec<Offer>> {
        let sql = format!("SELECT {OFFER_COLUMNS} FROM offers WHERE food_item_id = ?1 ORDER BY id");
        let offers = sqlx::query_as::<_, Offer>(&sql)
            .bind(food_item_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(offers)
    }

    /// Lists offers that are switched on and whose window contains `today`,
    /// ordered by id.
    pub async fn find_active_offers(&self, today: NaiveDate) -> DbResult<Vec<Offer>> {
        let sql = format!(
            "SELECT {OFFER_COLUMNS} FROM offers \
             WHERE is_active = 1 AND start_date <= ?1 AND end_date >= ?1 \
             ORDER BY id"
        );
        let offers = sqlx::query_as::<_, Offer>(&sql)
            .bind(today)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = offers.len(), today = %today, "Loaded active offers");
        Ok(offers)
    }

    /// Overwrites every stored field of an existing offer, `is_active` included.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - no offer with `offer.id`
    pub async fn update(&self, offer: &Offer) -> DbResult<Offer> {
        debug!(id = offer.id, "Updating offer");

        let result = sqlx::query(
            r#"
            UPDATE offers SET
                food_item_id = ?1,
                discount_percentage = ?2,
                description = ?3,
                start_date = ?4,
                end_date = ?5,
                is_active = ?6
            WHERE id = ?7
            "#,
        )
        .bind(offer.food_item_id)
        .bind(offer.discount_percentage)
        .bind(&offer.description)
        .bind(offer.start_date)
        .bind(offer.end_date)
        .bind(offer.is_active)
        .bind(offer.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Offer", offer.id));
        }

        Ok(offer.clone())
    }

    /// Deletes an offer by id.
    pub async fn delete_by_id(&self, id: i64) -> DbResult<u64> {
        debug!(id = id, "Deleting offer");

        let result = sqlx::query("DELETE FROM offers WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Switches an offer off. Already-inactive offers still count as matched.
    pub async fn deactivate_by_id(&self, id: i64) -> DbResult<u64> {
        debug!(id = id, "Deactivating offer");

        let result = sqlx::query("UPDATE offers SET is_active = 0 WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
