//! Row mapping for the users table.
//!
//! The table name is configurable, so rows are read through
//! `FromQueryResult` over statements built with sea-query rather than through
//! a static entity.

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{FromQueryResult, Value};

use domain::User;

/// One row of the users table, mapped by column name.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct UserRow {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub username: String,
    pub enabled: bool,
    pub native_access: Option<bool>,
    pub mobile_access: Option<bool>,
    pub amember_user_id: Option<i32>,
}

/// Convert database row to domain entity
impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            firstname: row.firstname,
            lastname: row.lastname,
            email: row.email,
            username: row.username,
            roles: Vec::new(),
            native_access: row.native_access.unwrap_or(false),
            mobile_access: row.mobile_access.unwrap_or(false),
            amember_user_id: row.amember_user_id,
            enabled: row.enabled,
        }
    }
}

/// Values of `user` in the order of [`domain::USER_COLUMNS`].
pub fn column_values(user: &User) -> Vec<SimpleExpr> {
    let values: Vec<Value> = vec![
        user.id.into(),
        user.firstname.clone().into(),
        user.lastname.clone().into(),
        user.email.clone().into(),
        user.username.clone().into(),
        user.enabled.into(),
        user.native_access.into(),
        user.mobile_access.into(),
        user.amember_user_id.into(),
    ];
    values.into_iter().map(SimpleExpr::Value).collect()
}
