//! API server configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                  | Default                         |
//! |---------------------------|---------------------------------|
//! | `MENU_HTTP_ADDR`          | `127.0.0.1:8080`                |
//! | `MENU_DB_PATH`            | `<platform data dir>/menu.db`   |
//! | `MENU_DB_MAX_CONNECTIONS` | `5`                             |

use directories::ProjectDirs;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use menu_db::DbConfig;

pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address the HTTP listener binds to.
    pub http_addr: SocketAddr,

    /// SQLite database file.
    pub database_path: PathBuf,

    /// Pool size.
    pub max_connections: u32,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup (env in production,
    /// a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let http_addr = lookup("MENU_HTTP_ADDR")
            .unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("MENU_HTTP_ADDR".to_string()))?;

        let database_path = match lookup("MENU_DB_PATH") {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_database_path()?,
        };

        let max_connections = match lookup("MENU_DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue("MENU_DB_MAX_CONNECTIONS".to_string()))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(ApiConfig {
            http_addr,
            database_path,
            max_connections,
        })
    }

    /// Database pool settings for this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone()).max_connections(self.max_connections)
    }
}

/// Platform data directory, created if missing.
///
/// - **macOS**: `~/Library/Application Support/com.menu.catalog/menu.db`
/// - **Linux**: `~/.local/share/catalog/menu.db`
fn default_database_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("com", "menu", "catalog").ok_or(ConfigError::NoDataDir)?;
    let data_dir = dirs.data_dir();

    std::fs::create_dir_all(data_dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {}", data_dir.display(), e)))?;

    Ok(data_dir.join("menu.db"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine app data directory")]
    NoDataDir,

    #[error("Could not create data directory {0}")]
    DataDir(String),
}
