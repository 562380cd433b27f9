//! # Repository Module
//!
//! Store adapters for the menu catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OfferEngine / CatalogService                                          │
//! │       │                                                                 │
//! │       │  db.offers().find_active_offers(today)                         │
//! │       ▼                                                                 │
//! │  OfferRepository / FoodItemRepository                                  │
//! │  ├── save / find_by_id / find_all                                      │
//! │  ├── update / delete_by_id                                             │
//! │  └── entity-specific queries                                           │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every list query is ordered by id ascending. The offer engine's
//! first-match discount rule depends on it.
//!
//! ## Available Repositories
//!
//! - [`food_item::FoodItemRepository`] - Food item CRUD
//! - [`offer::OfferRepository`] - Offer CRUD, active window, deactivation

pub mod food_item;
pub mod offer;
