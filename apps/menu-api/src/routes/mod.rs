//! # HTTP Routes
//!
//! Route table for the API. Handlers live in [`food_items`] and [`offers`];
//! they only translate JSON to engine calls and errors to [`ApiError`].

pub mod food_items;
pub mod offers;

use axum::extract::State;
use axum::routing::{get, post, put};
use axum::Router;

use crate::error::{ApiError, ErrorCode};
use crate::state::AppState;

/// Builds the full router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/food-items",
            get(food_items::list).post(food_items::create),
        )
        .route("/api/food-items/sorted", get(food_items::list_sorted))
        .route("/api/food-items/price", put(food_items::update_price))
        .route(
            "/api/food-items/by-name/{name}",
            axum::routing::delete(food_items::delete_by_name),
        )
        .route(
            "/api/food-items/{id}",
            get(food_items::get_by_id).delete(food_items::delete_by_id),
        )
        .route(
            "/api/food-items/{id}/discounted-price",
            get(food_items::discounted_price),
        )
        .route("/api/offers", get(offers::list).post(offers::create))
        .route("/api/offers/active", get(offers::list_active))
        .route(
            "/api/offers/by-food/{food_item_id}",
            get(offers::list_by_food_item),
        )
        .route(
            "/api/offers/{id}",
            get(offers::get_by_id)
                .put(offers::update)
                .delete(offers::delete),
        )
        .route("/api/offers/{id}/deactivate", post(offers::deactivate))
        .with_state(state)
}

/// Health check endpoint. Fails when the database stops answering.
async fn health_handler(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    if state.db.health_check().await {
        Ok("OK")
    } else {
        Err(ApiError::new(ErrorCode::Internal, "Database health check failed"))
    }
}

// =============================================================================
// Route Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use chrono::NaiveDate;
    use menu_db::{Database, DbConfig};
    use menu_engine::FixedClock;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app() -> (Router, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let state = AppState::new(db.clone(), Arc::new(FixedClock(today)));
        (router(state), db)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    async fn add_pizza(app: &Router) -> Value {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/food-items",
            Some(json!({ "name": "Pizza", "priceCents": 1050, "type": "meal", "calories": 800 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_food_item_lifecycle() {
        let (app, _) = app().await;

        let pizza = add_pizza(&app).await;
        assert_eq!(pizza["id"], 1);
        assert_eq!(pizza["description"], "Meal: Pizza (800 cal)");
        assert_eq!(pizza["basicInfo"], "Pizza - $10.50");

        let (_, list) = send(&app, Method::GET, "/api/food-items", None).await;
        assert_eq!(list.as_array().map(Vec::len), Some(1));

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/food-items/price",
            Some(json!({ "name": "Pizza", "priceCents": 1200 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, list) = send(&app, Method::GET, "/api/food-items", None).await;
        assert_eq!(list[0]["priceCents"], 1200);

        let (status, _) = send(&app, Method::DELETE, "/api/food-items/by-name/Pizza", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, list) = send(&app, Method::GET, "/api/food-items", None).await;
        assert_eq!(list, json!([]));
    }

    #[tokio::test]
    async fn test_food_item_errors() {
        let (app, _) = app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/food-items",
            Some(json!({ "name": "Pizza", "priceCents": 0, "type": "meal" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/food-items",
            Some(json!({ "name": "Cake", "priceCents": 400, "type": "dessert" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");

        let (status, body) = send(&app, Method::GET, "/api/food-items/9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Food item not found with ID: 9");

        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/food-items/price",
            Some(json!({ "name": "Calzone", "priceCents": 900 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, "/api/food-items/9", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_sorted_listing() {
        let (app, _) = app().await;
        for name in ["soup", "Burger", "apple pie"] {
            send(
                &app,
                Method::POST,
                "/api/food-items",
                Some(json!({ "name": name, "priceCents": 500, "type": "meal" })),
            )
            .await;
        }

        let (_, list) = send(&app, Method::GET, "/api/food-items/sorted", None).await;
        let names: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|item| item["name"].as_str())
            .collect();
        assert_eq!(names, vec!["apple pie", "Burger", "soup"]);
    }

    #[tokio::test]
    async fn test_offer_pricing_flow() {
        let (app, _) = app().await;
        add_pizza(&app).await;

        let (status, offer) = send(
            &app,
            Method::POST,
            "/api/offers",
            Some(json!({
                "foodItemId": 1,
                "discountPercentage": 20.0,
                "description": "Summer deal",
                "startDate": "2024-01-01",
                "endDate": "2024-12-31"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(offer["isActive"], true);
        assert_eq!(offer["startDate"], "2024-01-01");

        let (_, price) = send(&app, Method::GET, "/api/food-items/1/discounted-price", None).await;
        assert_eq!(price["originalPriceCents"], 1050);
        assert_eq!(price["discountedPriceCents"], 840);

        let (_, active) = send(&app, Method::GET, "/api/offers/active", None).await;
        assert_eq!(active.as_array().map(Vec::len), Some(1));

        let (status, _) = send(&app, Method::POST, "/api/offers/1/deactivate", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (_, price) = send(&app, Method::GET, "/api/food-items/1/discounted-price", None).await;
        assert_eq!(price["discountedPriceCents"], 1050);

        let (_, active) = send(&app, Method::GET, "/api/offers/active", None).await;
        assert_eq!(active, json!([]));
    }

    #[tokio::test]
    async fn test_offer_partial_update_and_delete() {
        let (app, _) = app().await;
        add_pizza(&app).await;
        send(
            &app,
            Method::POST,
            "/api/offers",
            Some(json!({
                "foodItemId": 1,
                "discountPercentage": 20.0,
                "startDate": "2024-01-01",
                "endDate": "2024-12-31"
            })),
        )
        .await;

        let (status, updated) = send(
            &app,
            Method::PUT,
            "/api/offers/1",
            Some(json!({ "discountPercentage": 35.5 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["discountPercentage"], 35.5);
        assert_eq!(updated["endDate"], "2024-12-31");

        let (_, by_food) = send(&app, Method::GET, "/api/offers/by-food/1", None).await;
        assert_eq!(by_food.as_array().map(Vec::len), Some(1));

        let (status, _) = send(&app, Method::DELETE, "/api/offers/1", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, "/api/offers/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_offer_validation_errors() {
        let (app, _) = app().await;
        add_pizza(&app).await;

        let cases = [
            json!({ "foodItemId": 1, "discountPercentage": 0.0,
                    "startDate": "2024-01-01", "endDate": "2024-12-31" }),
            json!({ "foodItemId": 1, "discountPercentage": 100.0001,
                    "startDate": "2024-01-01", "endDate": "2024-12-31" }),
            json!({ "foodItemId": 1, "discountPercentage": 10.0,
                    "startDate": "2024-02-01", "endDate": "2024-01-01" }),
            json!({ "foodItemId": 1, "discountPercentage": 10.0,
                    "startDate": "01/02/2024", "endDate": "2024-12-31" }),
        ];
        for case in cases {
            let (status, body) = send(&app, Method::POST, "/api/offers", Some(case)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["code"], "VALIDATION_ERROR");
        }

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/offers",
            Some(json!({ "foodItemId": 42, "discountPercentage": 10.0,
                         "startDate": "2024-01-01", "endDate": "2024-12-31" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, all) = send(&app, Method::GET, "/api/offers", None).await;
        assert_eq!(all, json!([]));
    }
}
