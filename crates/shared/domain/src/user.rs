//! User domain entities and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record as exposed by the remote user service and the users table.
///
/// Roles are only carried over the API; the users table does not hold them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(rename = "nativeAccess", default)]
    pub native_access: bool,
    #[serde(rename = "mobileAccess", default)]
    pub mobile_access: bool,
    /// Identifier in the external membership system
    #[serde(rename = "amemberUserId", default)]
    pub amember_user_id: Option<i32>,
    #[serde(default)]
    pub enabled: bool,
}

impl User {
    /// Check if the user may use the native or the mobile product
    pub fn has_product_access(&self) -> bool {
        self.native_access || self.mobile_access
    }

    /// Check if the user carries a role by name
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Read-only projection of a user joined with subscription and traffic source
/// summaries. Produced from `users_view` only, never written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewUser {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "native_subscription_plan")]
    pub subscription_plan: Option<String>,
    pub native_access: bool,
    pub mobile_access: bool,
    pub notes: Option<String>,
    pub vertical: Option<String>,
    pub sub_users: i64,
    pub connected_traffic_sources: Option<String>,
    pub currencies: Option<String>,
    pub connected_trackers: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Association between a user and a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRolePivot {
    pub user_id: i32,
    pub role_id: i32,
}

impl UserRolePivot {
    /// Link `user` to the given role
    pub fn new(user: &User, role_id: i32) -> Self {
        Self {
            user_id: user.id,
            role_id,
        }
    }
}

/// Body returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginToken {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_api_shape() {
        let body = r#"{"id":1,"username":"alice","firstname":"Alice","lastname":"A","email":"a@x.com","roles":["user"],"nativeAccess":true,"mobileAccess":false,"enabled":true}"#;
        let user: User = serde_json::from_str(body).unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.username, "alice");
        assert_eq!(user.roles, vec!["user".to_string()]);
        assert!(user.native_access);
        assert!(!user.mobile_access);
        assert_eq!(user.amember_user_id, None);
        assert!(user.enabled);
    }

    #[test]
    fn test_user_defaults_missing_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id":7,"username":"bob"}"#).unwrap();

        assert!(user.roles.is_empty());
        assert!(!user.has_product_access());
        assert!(!user.enabled);
    }

    #[test]
    fn test_user_serializes_camel_case_flags() {
        let user = User {
            id: 3,
            username: "carol".to_string(),
            mobile_access: true,
            amember_user_id: Some(42),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["mobileAccess"], true);
        assert_eq!(json["amemberUserId"], 42);
        assert!(user.has_product_access());
    }

    #[test]
    fn test_login_token_requires_token_field() {
        assert!(serde_json::from_str::<LoginToken>(r#"{"jwt":"x"}"#).is_err());

        let token: LoginToken = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(token.token, "abc123");
    }

    #[test]
    fn test_role_pivot_from_user() {
        let user = User {
            id: 9,
            username: "dave".to_string(),
            roles: vec!["admin".to_string()],
            ..Default::default()
        };
        let pivot = UserRolePivot::new(&user, 2);

        assert_eq!(pivot, UserRolePivot { user_id: 9, role_id: 2 });
        assert!(user.has_role("admin"));
    }
}
