//! # Application State
//!
//! Everything the handlers share, built once at startup and cloned into
//! each request by axum. Cloning is cheap: every field is `Arc`-backed.
//!
//! ```text
//! AppState
//! ├── db       Database        (health check)
//! ├── catalog  CatalogService ──┐
//! │                             ├── Arc<FoodItemRepository>
//! └── offers   OfferEngine ─────┘   (one store shared by both)
//! ```

use std::sync::Arc;

use menu_db::Database;
use menu_engine::{CatalogCache, CatalogService, Clock, FoodItemStore, OfferEngine};

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub catalog: CatalogService,
    pub offers: OfferEngine,
}

impl AppState {
    /// Wires the services over `db` with a fresh, empty catalog cache.
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        let food_items: Arc<dyn FoodItemStore> = Arc::new(db.food_items());
        let catalog = CatalogService::new(food_items.clone(), Arc::new(CatalogCache::new()));
        let offers = OfferEngine::new(Arc::new(db.offers()), food_items, clock);

        AppState {
            db,
            catalog,
            offers,
        }
    }
}
