//! Traffic source entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::TrafficSource;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "traffic_source")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub status: i32,
    pub credentials: Option<String>,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
    pub settings: Option<String>,
    pub encrypted_credentials: Option<String>,
    pub user_id: i32,
    pub traffic_source_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for TrafficSource {
    fn from(model: Model) -> Self {
        TrafficSource {
            id: model.id,
            name: model.name,
            status: model.status,
            credentials: model.credentials,
            encrypted_credentials: model.encrypted_credentials,
            settings: model.settings,
            user_id: model.user_id,
            traffic_source_type_id: model.traffic_source_type_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
