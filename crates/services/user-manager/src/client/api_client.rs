//! HTTP client for the remote user manager API.
//!
//! Login is a form POST returning `{"token": "..."}`; the token is then sent
//! as a Bearer credential. Every listing logs in again, there is no token
//! reuse or expiry tracking.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::{debug, error};

use common::{ApiClientConfig, AppError, AppResult};
use domain::{
    LoginToken, User, BEARER_TOKEN_PREFIX, LOGIN_PASSWORD_FIELD, LOGIN_PATH,
    LOGIN_USERNAME_FIELD, USERS_PATH,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Operations against the remote user service.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Exchange the configured credentials for a bearer token.
    ///
    /// On success the token is stored and returned. On failure the
    /// previously stored token is left as it was.
    async fn login(&self) -> AppResult<String>;

    /// Log in, then fetch every user.
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Token from the last successful login
    async fn token(&self) -> Option<String>;
}

/// Build the shared HTTP client. The connect timeout bounds TCP connect and
/// TLS handshake only; requests have no overall deadline.
pub fn build_http_client(config: &ApiClientConfig) -> AppResult<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(config.connect_timeout())
        .build()
        .map_err(|e| AppError::configuration(format!("Failed to build HTTP client: {}", e)))
}

/// reqwest-backed implementation of [`UserApi`].
pub struct ApiUserClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
    token: RwLock<Option<String>>,
}

impl ApiUserClient {
    /// Create a client with its own HTTP connection pool.
    pub fn new(config: &ApiClientConfig) -> AppResult<Self> {
        let http = build_http_client(config)?;
        Self::with_http_client(http, config)
    }

    /// Create a client over an existing HTTP connection pool.
    pub fn with_http_client(http: reqwest::Client, config: &ApiClientConfig) -> AppResult<Self> {
        if config.base_url.trim().is_empty() {
            return Err(AppError::configuration("API base URL is empty"));
        }

        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
            token: RwLock::new(None),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map non-success statuses to errors, keeping 401 distinct.
    fn check_status(resp: &reqwest::Response) -> AppResult<()> {
        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthorized);
        }
        if !status.is_success() {
            return Err(AppError::Api {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").into(),
            });
        }
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> AppResult<T> {
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| AppError::decode(e.to_string()))
    }

    async fn request_token(&self) -> AppResult<String> {
        let resp = self
            .http
            .post(self.url(LOGIN_PATH))
            .form(&[
                (LOGIN_USERNAME_FIELD, self.username.as_str()),
                (LOGIN_PASSWORD_FIELD, self.password.as_str()),
            ])
            .send()
            .await?;

        Self::check_status(&resp)?;
        let login: LoginToken = Self::decode(resp).await?;

        if login.token.is_empty() {
            return Err(AppError::decode("login response carried an empty token"));
        }
        Ok(login.token)
    }

    async fn fetch_users(&self, token: &str) -> AppResult<Vec<User>> {
        let url = self.url(USERS_PATH);
        debug!("Fetching users from {}", url);

        let resp = self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("{}{}", BEARER_TOKEN_PREFIX, token))
            .send()
            .await
            .inspect_err(|e| error!("Users request failed: {}", e))?;

        Self::check_status(&resp)?;
        Self::decode(resp)
            .await
            .inspect_err(|e| error!("Users response rejected: {}", e))
    }
}

#[async_trait]
impl UserApi for ApiUserClient {
    async fn login(&self) -> AppResult<String> {
        debug!("Logging in to user service at {}", self.base_url);

        match self.request_token().await {
            Ok(token) => {
                *self.token.write().await = Some(token.clone());
                Ok(token)
            }
            Err(e) => {
                error!("Login failed: {}", e);
                Err(AppError::authentication(e.to_string()))
            }
        }
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        // Use this call's own token so concurrent logins cannot swap it.
        let token = self.login().await?;
        self.fetch_users(&token).await
    }

    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
