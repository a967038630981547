//! `users_view` projection entity for SeaORM.
//!
//! Columns are matched by name. A view missing one of these columns fails
//! the read instead of shifting values into the wrong fields.

use sea_orm::entity::prelude::*;

use domain::ViewUser;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users_view")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTimeUtc,
    pub native_subscription_plan: Option<String>,
    pub native_access: Option<bool>,
    pub mobile_access: Option<bool>,
    pub notes: Option<String>,
    pub vertical: Option<String>,
    pub sub_users: Option<i64>,
    pub connected_traffic_sources: Option<String>,
    pub currencies: Option<String>,
    pub connected_trackers: Option<String>,
    pub last_login: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert view row to the read model
impl From<Model> for ViewUser {
    fn from(model: Model) -> Self {
        ViewUser {
            id: model.id,
            firstname: model.firstname,
            lastname: model.lastname,
            username: model.username,
            email: model.email,
            created_at: model.created_at,
            subscription_plan: model.native_subscription_plan,
            native_access: model.native_access.unwrap_or(false),
            mobile_access: model.mobile_access.unwrap_or(false),
            notes: model.notes,
            vertical: model.vertical,
            sub_users: model.sub_users.unwrap_or(0),
            connected_traffic_sources: model.connected_traffic_sources,
            currencies: model.currencies,
            connected_trackers: model.connected_trackers,
            last_login: model.last_login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn test_projection_has_sixteen_columns() {
        assert_eq!(Column::iter().count(), 16);
    }
}
