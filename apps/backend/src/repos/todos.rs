use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use time::{Date, OffsetDateTime};

use crate::entities::todos;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub struct TodoCreate {
    pub content: String,
    pub due_date: Option<Date>,
}

/// `None` leaves a field unchanged; `Some(None)` clears a nullable one.
#[derive(Default)]
pub struct TodoUpdate {
    pub content: Option<String>,
    pub due_date: Option<Option<Date>>,
    pub is_completed: Option<bool>,
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Todo, format!("Todo {id} not found"))
}

/// Newest first; `limit` caps the page for the dashboard.
pub async fn list<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    limit: Option<u64>,
) -> Result<Vec<todos::Model>, DomainError> {
    todos::Entity::find()
        .filter(todos::Column::CoupleId.eq(couple_id))
        .order_by_desc(todos::Column::CreatedAt)
        .order_by_desc(todos::Column::Id)
        .limit(limit)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    id: i64,
) -> Result<todos::Model, DomainError> {
    todos::Entity::find_by_id(id)
        .filter(todos::Column::CoupleId.eq(couple_id))
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| not_found(id))
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    dto: TodoCreate,
) -> Result<todos::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    todos::ActiveModel {
        id: NotSet,
        couple_id: Set(couple_id.to_string()),
        content: Set(dto.content),
        due_date: Set(dto.due_date),
        is_completed: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
    .map_err(map_db_err)
}

pub async fn update<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    id: i64,
    dto: TodoUpdate,
) -> Result<todos::Model, DomainError> {
    let mut active: todos::ActiveModel = find(conn, couple_id, id).await?.into();

    if let Some(content) = dto.content {
        active.content = Set(content);
    }
    if let Some(due_date) = dto.due_date {
        active.due_date = Set(due_date);
    }
    if let Some(done) = dto.is_completed {
        active.is_completed = Set(done);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await.map_err(map_db_err)
}

pub async fn delete<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    id: i64,
) -> Result<(), DomainError> {
    let result = todos::Entity::delete_many()
        .filter(todos::Column::Id.eq(id))
        .filter(todos::Column::CoupleId.eq(couple_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    if result.rows_affected == 0 {
        return Err(not_found(id));
    }
    Ok(())
}
