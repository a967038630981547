//! Domain-level constants.
//!
//! Table names, wire paths and limits shared by the access layer.

// =============================================================================
// Remote API
// =============================================================================

/// Login endpoint, relative to the API base URL
pub const LOGIN_PATH: &str = "/api/login_check";

/// User listing endpoint, relative to the API base URL
pub const USERS_PATH: &str = "/users";

/// Form field carrying the login username
pub const LOGIN_USERNAME_FIELD: &str = "_username";

/// Form field carrying the login password
pub const LOGIN_PASSWORD_FIELD: &str = "_password";

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Relational store
// =============================================================================

/// Default name of the users table
pub const DEFAULT_USERS_TABLE: &str = "user";

/// Columns of the users table mapped onto [`crate::User`].
///
/// Condition fields are checked against this list before a query is built.
pub const USER_COLUMNS: &[&str] = &[
    "id",
    "firstname",
    "lastname",
    "email",
    "username",
    "enabled",
    "native_access",
    "mobile_access",
    "amember_user_id",
];

/// Default cap on rows returned by a filtered user listing
pub const DEFAULT_ROW_LIMIT: u64 = 10_000;

/// Traffic source status flag for active sources
pub const TRAFFIC_SOURCE_ACTIVE: i32 = 1;

/// Check if a column name belongs to the users table mapping
pub fn is_user_column(field: &str) -> bool {
    USER_COLUMNS.contains(&field)
}
