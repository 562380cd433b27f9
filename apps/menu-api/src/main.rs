//! # Menu API Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  HTTP client ──► axum (routes/) ──► CatalogService ──► CatalogCache     │
//! │                        │                   │                            │
//! │                        └──► OfferEngine ───┴──► SQLite (menu.db)        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs for better testability.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    menu_api::run().await
}
