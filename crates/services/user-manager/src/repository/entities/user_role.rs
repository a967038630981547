//! User/role association entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::UserRolePivot;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_role")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<UserRolePivot> for ActiveModel {
    fn from(pivot: UserRolePivot) -> Self {
        ActiveModel {
            user_id: Set(pivot.user_id),
            role_id: Set(pivot.role_id),
        }
    }
}
