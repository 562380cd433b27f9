//! # Food Item Routes
//!
//! Thin translation between JSON and [`CatalogService`](menu_engine::CatalogService).
//!
//! | Method | Path                                   | Service call                        |
//! |--------|----------------------------------------|-------------------------------------|
//! | GET    | `/api/food-items`                      | `get_all_food_items` (cached)       |
//! | GET    | `/api/food-items/sorted`               | `get_all_food_items_sorted_by_name` |
//! | GET    | `/api/food-items/{id}`                 | `get_food_item_by_id`               |
//! | POST   | `/api/food-items`                      | `add_food_item`                     |
//! | PUT    | `/api/food-items/price`                | `update_price`                      |
//! | DELETE | `/api/food-items/{id}`                 | `delete_food_item_by_id`            |
//! | DELETE | `/api/food-items/by-name/{name}`       | `delete_food_item`                  |
//! | GET    | `/api/food-items/{id}/discounted-price`| `get_discounted_price_for_item`     |

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use menu_core::{FoodItem, FoodKind, Money, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

/// Food item as the client sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItemDto {
    pub id: i64,
    pub name: String,
    pub price_cents: i64,
    /// `"meal"` or `"drink"`
    #[serde(rename = "type")]
    pub kind: String,
    pub calories: Option<i32>,
    pub volume_ml: Option<i32>,
    /// e.g. "Meal: Pizza (800 cal)"
    pub description: String,
    /// e.g. "Pizza - $10.50"
    pub basic_info: String,
}

impl From<FoodItem> for FoodItemDto {
    fn from(item: FoodItem) -> Self {
        FoodItemDto {
            description: item.description(),
            basic_info: item.basic_info(),
            kind: item.kind.tag().to_string(),
            calories: item.kind.calories(),
            volume_ml: item.kind.volume_ml(),
            id: item.id,
            name: item.name,
            price_cents: item.price_cents,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodItemRequest {
    pub name: String,
    pub price_cents: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub calories: Option<i32>,
    #[serde(default)]
    pub volume_ml: Option<i32>,
}

impl CreateFoodItemRequest {
    fn into_food_item(self) -> Result<FoodItem, ValidationError> {
        let kind = FoodKind::from_parts(&self.kind.to_lowercase(), self.calories, self.volume_ml)
            .ok_or_else(|| ValidationError::InvalidFormat {
                field: "type".to_string(),
                reason: format!("expected 'meal' or 'drink', got '{}'", self.kind),
            })?;

        Ok(FoodItem {
            id: 0,
            name: self.name,
            price_cents: self.price_cents,
            kind,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePriceRequest {
    pub name: String,
    pub price_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedResponse {
    pub updated: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountedPriceResponse {
    pub food_item_id: i64,
    pub original_price_cents: i64,
    pub discounted_price_cents: i64,
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<FoodItemDto>>, ApiError> {
    let items = state.catalog.get_all_food_items().await?;
    Ok(Json(items.into_iter().map(FoodItemDto::from).collect()))
}

pub async fn list_sorted(
    State(state): State<AppState>,
) -> Result<Json<Vec<FoodItemDto>>, ApiError> {
    let items = state.catalog.get_all_food_items_sorted_by_name().await?;
    Ok(Json(items.into_iter().map(FoodItemDto::from).collect()))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FoodItemDto>, ApiError> {
    let item = state.catalog.get_food_item_by_id(id).await?;
    Ok(Json(item.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateFoodItemRequest>,
) -> Result<(StatusCode, Json<FoodItemDto>), ApiError> {
    let item = request.into_food_item()?;
    let saved = state.catalog.add_food_item(item).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

/// 404 when no item has the given name.
pub async fn update_price(
    State(state): State<AppState>,
    Json(request): Json<UpdatePriceRequest>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let updated = state
        .catalog
        .update_price(&request.name, Money::from_cents(request.price_cents))
        .await?;

    if updated == 0 {
        return Err(ApiError::not_found("Food item", &request.name));
    }
    Ok(Json(UpdatedResponse { updated }))
}

pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    match state.catalog.delete_food_item_by_id(id).await? {
        0 => Err(ApiError::not_found("Food item", id)),
        _ => Ok(StatusCode::NO_CONTENT),
    }
}

pub async fn delete_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, ApiError> {
    match state.catalog.delete_food_item(&name).await? {
        0 => Err(ApiError::not_found("Food item", &name)),
        deleted => {
            debug!(name = %name, deleted, "Deleted by name");
            Ok(StatusCode::NO_CONTENT)
        }
    }
}

pub async fn discounted_price(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DiscountedPriceResponse>, ApiError> {
    let (original, discounted) = state.offers.get_discounted_price_for_item(id).await?;

    Ok(Json(DiscountedPriceResponse {
        food_item_id: id,
        original_price_cents: original.cents(),
        discounted_price_cents: discounted.cents(),
    }))
}
