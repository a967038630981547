//! User manager configuration.

use std::env;

use common::{ApiClientConfig, DatabaseConfig};
use domain::{DEFAULT_ROW_LIMIT, DEFAULT_USERS_TABLE};

/// User manager configuration.
#[derive(Debug, Clone)]
pub struct UserManagerConfig {
    /// Remote user service endpoint and credentials
    pub api: ApiClientConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Read users from the database instead of the API
    pub use_db: bool,
    /// Name of the users table
    pub users_table: String,
    /// Row cap for filtered user listings
    pub max_rows: u64,
}

impl UserManagerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api: ApiClientConfig {
                base_url: env::var("USER_MANAGER_API_URL").unwrap_or(defaults.api.base_url),
                username: env::var("USER_MANAGER_API_USERNAME").unwrap_or_default(),
                password: env::var("USER_MANAGER_API_PASSWORD").unwrap_or_default(),
                connect_timeout_ms: env::var("USER_MANAGER_CONNECT_TIMEOUT_MS")
                    .ok()
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(defaults.api.connect_timeout_ms),
            },
            database: DatabaseConfig {
                url: env::var("USER_MANAGER_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("USER_MANAGER_DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: defaults.database.min_connections,
            },
            use_db: env::var("USER_MANAGER_USE_DB")
                .map(|v| parse_use_db(&v))
                .unwrap_or(false),
            users_table: env::var("USER_MANAGER_USERS_TABLE")
                .ok()
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(defaults.users_table),
            max_rows: env::var("USER_MANAGER_MAX_ROWS")
                .ok()
                .and_then(|r| r.parse().ok())
                .unwrap_or(DEFAULT_ROW_LIMIT),
        }
    }
}

/// Only the literal `true` selects database mode.
pub fn parse_use_db(value: &str) -> bool {
    value == "true"
}

impl Default for UserManagerConfig {
    fn default() -> Self {
        Self {
            api: ApiClientConfig::default(),
            database: DatabaseConfig::default(),
            use_db: false,
            users_table: DEFAULT_USERS_TABLE.to_string(),
            max_rows: DEFAULT_ROW_LIMIT,
        }
    }
}
