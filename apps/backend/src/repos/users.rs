use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use time::OffsetDateTime;
use ulid::Ulid;

use crate::entities::{user_credentials, users};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub struct CredentialsCreate {
    pub user_id: String,
    pub email: String,
    pub password_hash: String,
}

pub async fn create_user<C: ConnectionTrait>(
    conn: &C,
    name: &str,
) -> Result<users::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    users::ActiveModel {
        id: Set(Ulid::new().to_string()),
        name: Set(name.to_string()),
        couple_id: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

pub async fn create_credentials<C: ConnectionTrait>(
    conn: &C,
    dto: CredentialsCreate,
) -> Result<user_credentials::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    user_credentials::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        email: Set(dto.email),
        password_hash: Set(dto.password_hash),
        last_login: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

/// `email` must already be normalized.
pub async fn find_credentials_by_email<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Option<user_credentials::Model>, DomainError> {
    user_credentials::Entity::find()
        .filter(user_credentials::Column::Email.eq(email))
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find_credentials_by_user<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> Result<Option<user_credentials::Model>, DomainError> {
    user_credentials::Entity::find()
        .filter(user_credentials::Column::UserId.eq(user_id))
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find_user_by_id<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> Result<Option<users::Model>, DomainError> {
    users::Entity::find_by_id(user_id.to_string())
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn require_user<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
) -> Result<users::Model, DomainError> {
    find_user_by_id(conn, user_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, "User not found"))
}

pub async fn record_login<C: ConnectionTrait>(
    conn: &C,
    credentials: user_credentials::Model,
) -> Result<user_credentials::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    let mut active: user_credentials::ActiveModel = credentials.into();
    active.last_login = Set(Some(now));
    active.updated_at = Set(now);
    active.update(conn).await.map_err(map_db_err)
}

pub async fn set_couple<C: ConnectionTrait>(
    conn: &C,
    user: users::Model,
    couple_id: &str,
) -> Result<users::Model, DomainError> {
    let mut active: users::ActiveModel = user.into();
    active.couple_id = Set(Some(couple_id.to_string()));
    active.updated_at = Set(OffsetDateTime::now_utc());
    active.update(conn).await.map_err(map_db_err)
}

/// Members in the order they joined.
pub async fn list_couple_members<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
) -> Result<Vec<users::Model>, DomainError> {
    users::Entity::find()
        .filter(users::Column::CoupleId.eq(couple_id))
        .order_by_asc(users::Column::UpdatedAt)
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn count_couple_members<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
) -> Result<u64, DomainError> {
    users::Entity::find()
        .filter(users::Column::CoupleId.eq(couple_id))
        .count(conn)
        .await
        .map_err(map_db_err)
}
