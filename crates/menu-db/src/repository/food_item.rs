//! # Food Item Repository
//!
//! Database operations for food items.
//!
//! ## Row Mapping
//! ```text
//! ┌──────────────────────────────────────┐        ┌───────────────────────┐
//! │ food_items row                       │        │ FoodItem              │
//! │ id | name | price_cents | kind |     │  ───►  │ kind: FoodKind::Meal  │
//! │ calories | volume_ml                 │        │   { calories }        │
//! └──────────────────────────────────────┘        └───────────────────────┘
//! ```
//! The kind is a tag column plus one optional attribute column per variant.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use menu_core::{FoodItem, FoodKind, Money};

/// Raw `food_items` row.
#[derive(Debug, sqlx::FromRow)]
struct FoodItemRow {
    id: i64,
    name: String,
    price_cents: i64,
    kind: String,
    calories: Option<i32>,
    volume_ml: Option<i32>,
}

impl TryFrom<FoodItemRow> for FoodItem {
    type Error = DbError;

    fn try_from(row: FoodItemRow) -> Result<Self, Self::Error> {
        let kind = FoodKind::from_parts(&row.kind, row.calories, row.volume_ml).ok_or_else(
            || DbError::CorruptRow {
                entity: "FoodItem".to_string(),
                id: row.id,
                reason: format!("unknown kind '{}'", row.kind),
            },
        )?;

        Ok(FoodItem {
            id: row.id,
            name: row.name,
            price_cents: row.price_cents,
            kind,
        })
    }
}

fn into_items(rows: Vec<FoodItemRow>) -> DbResult<Vec<FoodItem>> {
    rows.into_iter().map(FoodItem::try_from).collect()
}

/// Repository for food item database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = FoodItemRepository::new(pool);
///
/// let saved = repo.save(&FoodItem::meal("Pizza", Money::from_cents(1050))).await?;
/// let all = repo.find_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct FoodItemRepository {
    pool: SqlitePool,
}

impl FoodItemRepository {
    /// Creates a new FoodItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        FoodItemRepository { pool }
    }

    /// Inserts a food item and returns it with the assigned id.
    ///
    /// The incoming `id` is ignored.
    pub async fn save(&self, item: &FoodItem) -> DbResult<FoodItem> {
        debug!(name = %item.name, kind = item.kind.tag(), "Inserting food item");

        let result = sqlx::query(
            r#"
            INSERT INTO food_items (name, price_cents, kind, calories, volume_ml)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&item.name)
        .bind(item.price_cents)
        .bind(item.kind.tag())
        .bind(item.kind.calories())
        .bind(item.kind.volume_ml())
        .execute(&self.pool)
        .await?;

        let mut saved = item.clone();
        saved.id = result.last_insert_rowid();

        debug!(id = saved.id, "Food item inserted");
        Ok(saved)
    }

    /// Gets a food item by id.
    ///
    /// ## Returns
    /// * `Ok(Some(FoodItem))` - found
    /// * `Ok(None)` - no such id
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<FoodItem>> {
        let row = sqlx::query_as::<_, FoodItemRow>(
            r#"
            SELECT id, name, price_cents, kind, calories, volume_ml
            FROM food_items
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(FoodItem::try_from).transpose()
    }

    /// Lists every food item, ordered by id.
    pub async fn find_all(&self) -> DbResult<Vec<FoodItem>> {
        let rows = sqlx::query_as::<_, FoodItemRow>(
            r#"
            SELECT id, name, price_cents, kind, calories, volume_ml
            FROM food_items
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded food items");
        into_items(rows)
    }

    /// Sets the price of every item with this exact name.
    ///
    /// Returns the number of rows changed (0 when the name matches nothing).
    pub async fn update_price(&self, name: &str, price: Money) -> DbResult<u64> {
        debug!(name = %name, price = %price, "Updating food item price");

        let result = sqlx::query("UPDATE food_items SET price_cents = ?1 WHERE name = ?2")
            .bind(price.cents())
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes every item with this exact name. Their offers go with them.
    pub async fn delete_by_name(&self, name: &str) -> DbResult<u64> {
        debug!(name = %name, "Deleting food item by name");

        let result = sqlx::query("DELETE FROM food_items WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a food item by id. Its offers go with it.
    pub async fn delete_by_id(&self, id: i64) -> DbResult<u64> {
        debug!(id = id, "Deleting food item");

        let result = sqlx::query("DELETE FROM food_items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts food items (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM food_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> FoodItemRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().food_items()
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = repo().await;

        let pizza = repo
            .save(&FoodItem::meal("Pizza", Money::from_cents(1050)))
            .await
            .unwrap();
        let cola = repo
            .save(&FoodItem::drink("Cola", Money::from_cents(250)))
            .await
            .unwrap();

        assert_eq!(pizza.id, 1);
        assert_eq!(cola.id, 2);
    }

    #[tokio::test]
    async fn test_kind_attributes_round_trip() {
        let repo = repo().await;
        let water = FoodItem::drink("Water", Money::from_cents(150))
            .with_kind(FoodKind::Drink { volume_ml: Some(500) });

        let saved = repo.save(&water).await.unwrap();
        let loaded = repo.find_by_id(saved.id).await.unwrap().unwrap();

        assert_eq!(loaded, saved);
        assert_eq!(loaded.kind.volume_ml(), Some(500));
    }

    #[tokio::test]
    async fn test_find_by_id_missing() {
        let repo = repo().await;
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = repo().await;
        for name in ["Soup", "Apple Pie", "Burger"] {
            repo.save(&FoodItem::meal(name, Money::from_cents(500)))
                .await
                .unwrap();
        }

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Soup", "Apple Pie", "Burger"]);
    }

    #[tokio::test]
    async fn test_update_price_by_name() {
        let repo = repo().await;
        let saved = repo
            .save(&FoodItem::meal("Pizza", Money::from_cents(1050)))
            .await
            .unwrap();

        let changed = repo.update_price("Pizza", Money::from_cents(1200)).await.unwrap();
        assert_eq!(changed, 1);
        let loaded = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(loaded.price_cents, 1200);

        let changed = repo.update_price("Calzone", Money::from_cents(900)).await.unwrap();
        assert_eq!(changed, 0);
    }

    #[tokio::test]
    async fn test_deletes() {
        let repo = repo().await;
        let pizza = repo
            .save(&FoodItem::meal("Pizza", Money::from_cents(1050)))
            .await
            .unwrap();
        repo.save(&FoodItem::drink("Cola", Money::from_cents(250)))
            .await
            .unwrap();

        assert_eq!(repo.delete_by_id(pizza.id).await.unwrap(), 1);
        assert_eq!(repo.delete_by_id(pizza.id).await.unwrap(), 0);
        assert_eq!(repo.delete_by_name("Cola").await.unwrap(), 1);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_schema_rejects_non_positive_price() {
        let repo = repo().await;
        let result = repo.save(&FoodItem::meal("Free Lunch", Money::from_cents(0))).await;
        assert!(matches!(result, Err(DbError::QueryFailed(_))));
    }
}
