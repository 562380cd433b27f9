//! # Offer Routes
//!
//! | Method | Path                              | Engine call               |
//! |--------|-----------------------------------|---------------------------|
//! | GET    | `/api/offers`                     | `get_all_offers`          |
//! | GET    | `/api/offers/active`              | `get_active_offers`       |
//! | GET    | `/api/offers/{id}`                | `get_offer_by_id`         |
//! | GET    | `/api/offers/by-food/{foodItemId}`| `get_offers_by_food_item` |
//! | POST   | `/api/offers`                     | `add_offer`               |
//! | PUT    | `/api/offers/{id}`                | `patch_offer`             |
//! | POST   | `/api/offers/{id}/deactivate`     | `deactivate_offer`        |
//! | DELETE | `/api/offers/{id}`                | `delete_offer`            |
//!
//! Dates travel as `YYYY-MM-DD` strings and are parsed here, so a malformed
//! date is reported as a validation error naming the field.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use menu_core::validation::parse_iso_date;
use menu_core::{Offer, OfferPatch, ValidationError};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferDto {
    pub id: i64,
    pub food_item_id: i64,
    pub discount_percentage: f64,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
}

impl From<Offer> for OfferDto {
    fn from(offer: Offer) -> Self {
        OfferDto {
            id: offer.id,
            food_item_id: offer.food_item_id,
            discount_percentage: offer.discount_percentage,
            description: offer.description,
            start_date: offer.start_date.to_string(),
            end_date: offer.end_date.to_string(),
            is_active: offer.is_active,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    pub food_item_id: i64,
    pub discount_percentage: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
}

impl CreateOfferRequest {
    fn into_offer(self) -> Result<Offer, ValidationError> {
        let start = parse_iso_date("start_date", &self.start_date)?;
        let end = parse_iso_date("end_date", &self.end_date)?;
        Ok(Offer::new(
            self.food_item_id,
            self.discount_percentage,
            self.description,
            start,
            end,
        ))
    }
}

/// Any subset of the offer's fields. Missing fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferRequest {
    pub food_item_id: Option<i64>,
    pub discount_percentage: Option<f64>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl UpdateOfferRequest {
    fn into_patch(self) -> Result<OfferPatch, ValidationError> {
        let start_date = self
            .start_date
            .as_deref()
            .map(|text| parse_iso_date("start_date", text))
            .transpose()?;
        let end_date = self
            .end_date
            .as_deref()
            .map(|text| parse_iso_date("end_date", text))
            .transpose()?;

        Ok(OfferPatch {
            food_item_id: self.food_item_id,
            discount_percentage: self.discount_percentage,
            description: self.description,
            start_date,
            end_date,
        })
    }
}

fn to_dtos(offers: Vec<Offer>) -> Json<Vec<OfferDto>> {
    Json(offers.into_iter().map(OfferDto::from).collect())
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<OfferDto>>, ApiError> {
    Ok(to_dtos(state.offers.get_all_offers().await?))
}

pub async fn list_active(State(state): State<AppState>) -> Result<Json<Vec<OfferDto>>, ApiError> {
    Ok(to_dtos(state.offers.get_active_offers().await?))
}

pub async fn list_by_food_item(
    State(state): State<AppState>,
    Path(food_item_id): Path<i64>,
) -> Result<Json<Vec<OfferDto>>, ApiError> {
    Ok(to_dtos(state.offers.get_offers_by_food_item(food_item_id).await?))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OfferDto>, ApiError> {
    let offer = state.offers.get_offer_by_id(id).await?;
    Ok(Json(offer.into()))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateOfferRequest>,
) -> Result<(StatusCode, Json<OfferDto>), ApiError> {
    let offer = request.into_offer()?;
    let saved = state.offers.add_offer(offer).await?;
    Ok((StatusCode::CREATED, Json(saved.into())))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateOfferRequest>,
) -> Result<Json<OfferDto>, ApiError> {
    let patch = request.into_patch()?;
    let updated = state.offers.patch_offer(id, patch).await?;
    Ok(Json(updated.into()))
}

pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.offers.deactivate_offer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.offers.delete_offer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
