//! User Manager Library
//!
//! Client-side access layer for the user manager service. Users are read
//! either from the remote API (token authenticated) or straight from the
//! database, and both paths are normalized into username-keyed maps.

pub mod client;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::AppResult;

use crate::client::ApiUserClient;
use crate::config::UserManagerConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::UserManager;

/// Connect to the database and build the façade described by `config`.
pub async fn connect(config: &UserManagerConfig) -> AppResult<UserManager> {
    let db = Database::connect(&config.database).await?;
    let api = ApiUserClient::new(&config.api)?;

    info!(
        "User manager ready (source: {})",
        if config.use_db { "database" } else { "api" }
    );

    Ok(build(db, api, config))
}

/// Assemble the façade from already constructed collaborators.
pub fn build(db: Database, api: ApiUserClient, config: &UserManagerConfig) -> UserManager {
    let repo = Arc::new(UserStore::new(db.get_connection(), config.users_table.clone()));

    UserManager::new(Arc::new(api), repo)
        .with_use_db(config.use_db)
        .with_max_rows(config.max_rows)
}
