//! # menu-engine: Offer Engine and Catalog Service
//!
//! The stateful layer between the HTTP routes and the database.
//!
//! ## Components
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   CatalogService ─────────┐            OfferEngine                      │
//! │   (catalog.rs)            │            (offers.rs)                      │
//! │        │                  ▼               │      │        │             │
//! │        │           CatalogCache           │      │        ▼             │
//! │        │           (cache.rs)             │      │      Clock           │
//! │        ▼                                  ▼      ▼   (clock.rs)         │
//! │   dyn FoodItemStore ◄─────────────────────┘  dyn OfferStore             │
//! │                         (store.rs)                                      │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                    menu-db repositories                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything is constructed explicitly and shared through `Arc`. There is
//! no global state.
//!
//! ## Usage
//! ```rust,ignore
//! let db = Database::new(DbConfig::new("menu.db")).await?;
//! let food_items: Arc<dyn FoodItemStore> = Arc::new(db.food_items());
//!
//! let catalog = CatalogService::new(food_items.clone(), Arc::new(CatalogCache::new()));
//! let offers = OfferEngine::new(Arc::new(db.offers()), food_items, Arc::new(SystemClock));
//! ```

pub mod cache;
pub mod catalog;
pub mod clock;
pub mod error;
pub mod offers;
pub mod store;

pub use cache::CatalogCache;
pub use catalog::CatalogService;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{EngineError, EngineResult};
pub use offers::OfferEngine;
pub use store::{FoodItemStore, OfferStore};
