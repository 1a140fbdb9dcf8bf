use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QuerySelect, Set};
use time::{Date, OffsetDateTime};
use ulid::Ulid;

use crate::entities::couples;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub async fn create_couple<C: ConnectionTrait>(
    conn: &C,
    wedding_date: Option<Date>,
) -> Result<couples::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    couples::ActiveModel {
        id: Set(Ulid::new().to_string()),
        wedding_date: Set(wedding_date),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

pub async fn find_couple<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
) -> Result<Option<couples::Model>, DomainError> {
    couples::Entity::find_by_id(couple_id.to_string())
        .one(conn)
        .await
        .map_err(map_db_err)
}

pub async fn require_couple<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
) -> Result<couples::Model, DomainError> {
    find_couple(conn, couple_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Couple, "Couple not found"))
}

/// `None` clears the date.
pub async fn set_wedding_date<C: ConnectionTrait>(
    conn: &C,
    couple: couples::Model,
    wedding_date: Option<Date>,
) -> Result<couples::Model, DomainError> {
    let mut active: couples::ActiveModel = couple.into();
    active.wedding_date = Set(wedding_date);
    active.updated_at = Set(OffsetDateTime::now_utc());
    active.update(conn).await.map_err(map_db_err)
}

/// Like [`require_couple`] but holds a row lock until the transaction ends,
/// so concurrent joins are counted one at a time. No-op on SQLite.
pub async fn lock_couple<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
) -> Result<couples::Model, DomainError> {
    couples::Entity::find_by_id(couple_id.to_string())
        .lock_exclusive()
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Couple, "Couple not found"))
}
