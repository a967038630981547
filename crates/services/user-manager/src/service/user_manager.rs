//! User manager façade - selects the API or the database and normalizes
//! results into keyed maps.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use common::{AppResult, OptionExt};
use domain::{Condition, TrafficSource, User, UserRolePivot, ViewUser, DEFAULT_ROW_LIMIT};

use crate::client::UserApi;
use crate::repository::UserRepository;

/// Outcome of a login probe against the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiStatus {
    Ok,
    Error(String),
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiStatus::Ok => write!(f, "OK"),
            ApiStatus::Error(_) => write!(f, "ERROR"),
        }
    }
}

/// User manager operations.
///
/// User maps are keyed by username and traffic source maps by id; a later
/// record with the same key replaces an earlier one.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Log in to the API and list every user
    async fn get_users_from_api(&self) -> AppResult<HashMap<String, User>>;

    /// List users from the database matching every condition
    async fn get_users_from_db(&self, conditions: &[Condition]) -> AppResult<HashMap<String, User>>;

    /// Get a single user from the database by username
    async fn get_user_from_db(&self, username: &str) -> AppResult<User>;

    /// Get a users view row by email
    async fn get_view_user(&self, email: &str) -> AppResult<ViewUser>;

    /// List every users view row
    async fn get_view_users(&self) -> AppResult<HashMap<String, ViewUser>>;

    /// List users from the database when `use_db` is set, from the API otherwise
    async fn get_users(&self, use_db: bool, conditions: &[Condition]) -> AppResult<HashMap<String, User>>;

    /// Same as [`UserService::get_users`] with the configured source
    async fn get_users_from_configured_source(
        &self,
        conditions: &[Condition],
    ) -> AppResult<HashMap<String, User>>;

    /// Create or update a user
    async fn upsert_user(&self, user: &User) -> AppResult<()>;

    /// Create or update the association of a user with a role
    async fn upsert_user_role(&self, user: &User, role_id: i32) -> AppResult<()>;

    /// Active traffic sources of users with native or mobile access
    async fn get_active_traffic_sources(&self) -> AppResult<HashMap<i32, TrafficSource>>;

    /// Every traffic source
    async fn get_traffic_sources(&self) -> AppResult<HashMap<i32, TrafficSource>>;

    /// Probe the API login
    async fn status(&self) -> ApiStatus;
}

/// Concrete implementation of UserService over the API client and repository.
pub struct UserManager {
    api: Arc<dyn UserApi>,
    repo: Arc<dyn UserRepository>,
    use_db: bool,
    max_rows: u64,
}

impl UserManager {
    /// Create a façade reading from the API by default
    pub fn new(api: Arc<dyn UserApi>, repo: Arc<dyn UserRepository>) -> Self {
        Self {
            api,
            repo,
            use_db: false,
            max_rows: DEFAULT_ROW_LIMIT,
        }
    }

    /// Select the source used by `get_users_from_configured_source`
    pub fn with_use_db(mut self, use_db: bool) -> Self {
        self.use_db = use_db;
        self
    }

    /// Cap the rows returned by database listings
    pub fn with_max_rows(mut self, max_rows: u64) -> Self {
        self.max_rows = max_rows;
        self
    }
}

fn by_username(users: Vec<User>) -> HashMap<String, User> {
    users.into_iter().map(|u| (u.username.clone(), u)).collect()
}

fn by_id(sources: Vec<TrafficSource>) -> HashMap<i32, TrafficSource> {
    sources.into_iter().map(|ts| (ts.id, ts)).collect()
}

#[async_trait]
impl UserService for UserManager {
    async fn get_users_from_api(&self) -> AppResult<HashMap<String, User>> {
        let users = self.api.list_users().await?;
        debug!("Fetched {} users from API", users.len());
        Ok(by_username(users))
    }

    async fn get_users_from_db(&self, conditions: &[Condition]) -> AppResult<HashMap<String, User>> {
        let users = self.repo.list(conditions, self.max_rows).await?;
        debug!("Fetched {} users from database", users.len());
        Ok(by_username(users))
    }

    async fn get_user_from_db(&self, username: &str) -> AppResult<User> {
        self.repo
            .find_by_username(username)
            .await?
            .ok_or_not_found()
    }

    async fn get_view_user(&self, email: &str) -> AppResult<ViewUser> {
        self.repo
            .find_view_user_by_email(email)
            .await?
            .ok_or_not_found()
    }

    async fn get_view_users(&self) -> AppResult<HashMap<String, ViewUser>> {
        let rows = self.repo.list_view_users().await?;
        Ok(rows.into_iter().map(|u| (u.username.clone(), u)).collect())
    }

    async fn get_users(&self, use_db: bool, conditions: &[Condition]) -> AppResult<HashMap<String, User>> {
        if use_db {
            return self.get_users_from_db(conditions).await;
        }

        self.get_users_from_api().await
    }

    async fn get_users_from_configured_source(
        &self,
        conditions: &[Condition],
    ) -> AppResult<HashMap<String, User>> {
        self.get_users(self.use_db, conditions).await
    }

    async fn upsert_user(&self, user: &User) -> AppResult<()> {
        self.repo.upsert(user).await
    }

    async fn upsert_user_role(&self, user: &User, role_id: i32) -> AppResult<()> {
        self.repo.upsert_role(UserRolePivot::new(user, role_id)).await
    }

    async fn get_active_traffic_sources(&self) -> AppResult<HashMap<i32, TrafficSource>> {
        Ok(by_id(self.repo.list_active_traffic_sources().await?))
    }

    async fn get_traffic_sources(&self) -> AppResult<HashMap<i32, TrafficSource>> {
        Ok(by_id(self.repo.list_traffic_sources().await?))
    }

    async fn status(&self) -> ApiStatus {
        match self.api.login().await {
            Ok(_) => ApiStatus::Ok,
            Err(e) => {
                warn!("User service status check failed: {}", e);
                ApiStatus::Error(e.to_string())
            }
        }
    }
}
