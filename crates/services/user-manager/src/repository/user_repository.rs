//! User repository implementation over the user manager database.

use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Condition as SqlCondition, Expr, OnConflict, Order, Query, SelectStatement};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    QueryOrder,
};
use tracing::debug;

use super::conditions::to_filter;
use super::entities::user::{column_values, UserRow};
use super::entities::{traffic_source, user_role, users_view};
use common::{AppError, AppResult};
use domain::{
    Condition, TrafficSource, User, UserRolePivot, ViewUser, TRAFFIC_SOURCE_ACTIVE, USER_COLUMNS,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Every method propagates store errors; none returns a partial result.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List users matching every condition, capped at `limit` rows
    async fn list(&self, conditions: &[Condition], limit: u64) -> AppResult<Vec<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// List every row of the users view
    async fn list_view_users(&self) -> AppResult<Vec<ViewUser>>;

    /// Find a users view row by email
    async fn find_view_user_by_email(&self, email: &str) -> AppResult<Option<ViewUser>>;

    /// Insert the user or overwrite the row with the same id
    async fn upsert(&self, user: &User) -> AppResult<()>;

    /// Insert the role association or overwrite the identical one
    async fn upsert_role(&self, pivot: UserRolePivot) -> AppResult<()>;

    /// List all traffic sources
    async fn list_traffic_sources(&self) -> AppResult<Vec<TrafficSource>>;

    /// List active traffic sources owned by users with native or mobile access
    async fn list_active_traffic_sources(&self) -> AppResult<Vec<TrafficSource>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
    users_table: String,
}

impl UserStore {
    /// Create new repository instance reading users from `users_table`
    pub fn new(db: DatabaseConnection, users_table: impl Into<String>) -> Self {
        Self {
            db,
            users_table: users_table.into(),
        }
    }

    fn users_table(&self) -> Alias {
        Alias::new(self.users_table.as_str())
    }

    /// `SELECT <user columns> FROM <users table>`
    fn select_users(&self) -> SelectStatement {
        Query::select()
            .columns(USER_COLUMNS.iter().map(|c| Alias::new(*c)))
            .from(self.users_table())
            .to_owned()
    }

    async fn fetch_users(&self, select: &SelectStatement) -> AppResult<Vec<User>> {
        let statement = self.db.get_database_backend().build(select);
        debug!("Querying users: {}", statement.sql);

        let rows = UserRow::find_by_statement(statement)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self, conditions: &[Condition], limit: u64) -> AppResult<Vec<User>> {
        let select = self
            .select_users()
            .cond_where(to_filter(conditions)?)
            .order_by(Alias::new("id"), Order::Asc)
            .limit(limit)
            .to_owned();

        self.fetch_users(&select).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let select = self
            .select_users()
            .and_where(Expr::col(Alias::new("username")).eq(username))
            .limit(1)
            .to_owned();

        Ok(self.fetch_users(&select).await?.into_iter().next())
    }

    async fn list_view_users(&self) -> AppResult<Vec<ViewUser>> {
        let models = users_view::Entity::find()
            .order_by_asc(users_view::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(ViewUser::from).collect())
    }

    async fn find_view_user_by_email(&self, email: &str) -> AppResult<Option<ViewUser>> {
        let result = users_view::Entity::find()
            .filter(users_view::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ViewUser::from))
    }

    async fn upsert(&self, user: &User) -> AppResult<()> {
        let updated = USER_COLUMNS
            .iter()
            .filter(|c| **c != "id")
            .map(|c| Alias::new(*c));

        let insert = Query::insert()
            .into_table(self.users_table())
            .columns(USER_COLUMNS.iter().map(|c| Alias::new(*c)))
            .values(column_values(user))
            .map_err(|e| AppError::internal(e.to_string()))?
            .on_conflict(
                OnConflict::column(Alias::new("id"))
                    .update_columns(updated)
                    .to_owned(),
            )
            .to_owned();

        let statement = self.db.get_database_backend().build(&insert);
        debug!("Upserting user {} ({})", user.username, user.id);

        self.db.execute(statement).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn upsert_role(&self, pivot: UserRolePivot) -> AppResult<()> {
        let on_conflict = OnConflict::columns([user_role::Column::UserId, user_role::Column::RoleId])
            .update_columns([user_role::Column::UserId, user_role::Column::RoleId])
            .to_owned();

        user_role::Entity::insert(user_role::ActiveModel::from(pivot))
            .on_conflict(on_conflict)
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn list_traffic_sources(&self) -> AppResult<Vec<TrafficSource>> {
        let models = traffic_source::Entity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(TrafficSource::from).collect())
    }

    async fn list_active_traffic_sources(&self) -> AppResult<Vec<TrafficSource>> {
        let owners = Query::select()
            .column(Alias::new("id"))
            .from(self.users_table())
            .cond_where(
                SqlCondition::any()
                    .add(Expr::col(Alias::new("native_access")).eq(true))
                    .add(Expr::col(Alias::new("mobile_access")).eq(true)),
            )
            .to_owned();

        let models = traffic_source::Entity::find()
            .filter(traffic_source::Column::Status.eq(TRAFFIC_SOURCE_ACTIVE))
            .filter(traffic_source::Column::UserId.in_subquery(owners))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(TrafficSource::from).collect())
    }
}
