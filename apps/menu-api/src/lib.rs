//! # Menu API Library
//!
//! HTTP server for the menu catalog. `main.rs` only calls [`run`].
//!
//! ## Module Organization
//! ```text
//! menu_api/
//! ├── lib.rs            ◄─── You are here (startup & run)
//! ├── config.rs         ◄─── Environment configuration
//! ├── state.rs          ◄─── AppState: Database + CatalogService + OfferEngine
//! ├── error.rs          ◄─── ApiError {code, message} → HTTP status
//! └── routes/
//!     ├── mod.rs        ◄─── Route table, health check
//!     ├── food_items.rs ◄─── /api/food-items/*
//!     └── offers.rs     ◄─── /api/offers/*
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ApiConfig;
use menu_db::Database;
use menu_engine::SystemClock;
use state::AppState;

/// Runs the API server until ctrl-c.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Server Startup                                    │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: info,menu=debug,sqlx=warn (override with RUST_LOG)       │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • MENU_HTTP_ADDR, MENU_DB_PATH, MENU_DB_MAX_CONNECTIONS             │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • Run pending migrations                                            │
/// │                                                                         │
/// │  4. Wire Services ────────────────────────────────────────────────────► │
/// │     • CatalogService with an empty CatalogCache                         │
/// │     • OfferEngine on the system clock                                   │
/// │                                                                         │
/// │  5. Serve HTTP until ctrl-c, then close the pool                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Menu API server");

    let config = ApiConfig::load()?;
    info!(
        addr = %config.http_addr,
        db_path = %config.database_path.display(),
        "Configuration loaded"
    );

    let db = Database::new(config.db_config()).await?;
    info!("Database connected and migrations applied");

    let state = AppState::new(db.clone(), Arc::new(SystemClock));
    let app = routes::router(state);

    let listener = TcpListener::bind(config.http_addr).await?;
    info!(addr = %config.http_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Menu API server stopped");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Verbose debugging
/// - `RUST_LOG=info` - Normal operation (default)
/// - `RUST_LOG=menu_engine=trace` - Trace one crate
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,menu=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
