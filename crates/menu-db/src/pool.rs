//! # Database Handle
//!
//! Opens the SQLite file, applies migrations and hands out repositories.
//!
//! ```text
//! DbConfig { path, max_connections }
//!      │
//!      ▼
//! Database::new ──► SqlitePool (WAL, foreign keys on) ──► migrations
//!      │
//!      ├──► food_items() : FoodItemRepository
//!      └──► offers()     : OfferRepository
//! ```
//!
//! Every repository shares the one pool; `Database` clones are cheap.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::food_item::FoodItemRepository;
use crate::repository::offer::OfferRepository;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the menu lives and how many connections may read it at once.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub database_path: PathBuf,
    /// Default: 5. Forced to 1 for in-memory databases.
    pub max_connections: u32,
}

impl DbConfig {
    /// Config for a database file, created on first connect.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// A fresh private database per call, for tests.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(":memory:"),
            // each connection to :memory: would see its own empty database
            max_connections: 1,
        }
    }
}

/// Handle over the connection pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connects and brings the schema up to date.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening menu database"
        );

        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());
        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // offers cascade on food item delete only with this on
            .foreign_keys(true)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        debug!(max_connections = config.max_connections, "Pool created");

        let db = Database { pool };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Applies pending migrations. Safe to call again.
    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn food_items(&self) -> FoodItemRepository {
        FoodItemRepository::new(self.pool.clone())
    }

    pub fn offers(&self) -> OfferRepository {
        OfferRepository::new(self.pool.clone())
    }

    /// Closes the pool. Later repository calls fail with `ConnectionFailed`.
    pub async fn close(&self) {
        info!("Closing menu database");
        self.pool.close().await;
    }

    /// True while the database still answers a trivial query.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
