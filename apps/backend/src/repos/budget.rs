use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::budget_items;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub struct BudgetItemCreate {
    pub category: String,
    pub item: String,
    pub amount: i64,
    pub paid_by: String,
}

#[derive(Default)]
pub struct BudgetItemUpdate {
    pub category: Option<String>,
    pub item: Option<String>,
    pub amount: Option<i64>,
    pub paid_by: Option<String>,
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::BudgetItem, format!("Budget item {id} not found"))
}

pub async fn list<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    limit: Option<u64>,
) -> Result<Vec<budget_items::Model>, DomainError> {
    budget_items::Entity::find()
        .filter(budget_items::Column::CoupleId.eq(couple_id))
        .order_by_desc(budget_items::Column::CreatedAt)
        .order_by_desc(budget_items::Column::Id)
        .limit(limit)
        .all(conn)
        .await
        .map_err(map_db_err)
}

/// `(amount, paid_by)` for every item of the couple, for totals.
pub async fn amounts<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
) -> Result<Vec<(i64, String)>, DomainError> {
    budget_items::Entity::find()
        .select_only()
        .column(budget_items::Column::Amount)
        .column(budget_items::Column::PaidBy)
        .filter(budget_items::Column::CoupleId.eq(couple_id))
        .into_tuple()
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    id: i64,
) -> Result<budget_items::Model, DomainError> {
    budget_items::Entity::find_by_id(id)
        .filter(budget_items::Column::CoupleId.eq(couple_id))
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| not_found(id))
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    dto: BudgetItemCreate,
) -> Result<budget_items::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    budget_items::ActiveModel {
        id: NotSet,
        couple_id: Set(couple_id.to_string()),
        category: Set(dto.category),
        item: Set(dto.item),
        amount: Set(dto.amount),
        paid_by: Set(dto.paid_by),
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
    dto: BudgetItemUpdate,
) -> Result<budget_items::Model, DomainError> {
    let mut active: budget_items::ActiveModel = find(conn, couple_id, id).await?.into();

    if let Some(category) = dto.category {
        active.category = Set(category);
    }
    if let Some(item) = dto.item {
        active.item = Set(item);
    }
    if let Some(amount) = dto.amount {
        active.amount = Set(amount);
    }
    if let Some(paid_by) = dto.paid_by {
        active.paid_by = Set(paid_by);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await.map_err(map_db_err)
}

pub async fn delete<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    id: i64,
) -> Result<(), DomainError> {
    let result = budget_items::Entity::delete_many()
        .filter(budget_items::Column::Id.eq(id))
        .filter(budget_items::Column::CoupleId.eq(couple_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    if result.rows_affected == 0 {
        return Err(not_found(id));
    }
    Ok(())
}
