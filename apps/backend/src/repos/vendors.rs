use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::domain::vendor::VendorCategory;
use crate::entities::vendors;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub struct VendorCreate {
    pub name: String,
    pub category: VendorCategory,
    pub contact: Option<String>,
    pub cost: Option<i64>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub status: String,
}

#[derive(Default)]
pub struct VendorUpdate {
    pub name: Option<String>,
    pub category: Option<VendorCategory>,
    pub contact: Option<Option<String>>,
    pub cost: Option<Option<i64>>,
    pub pros: Option<Option<String>>,
    pub cons: Option<Option<String>>,
    pub status: Option<String>,
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Vendor, format!("Vendor {id} not found"))
}

pub async fn list<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    limit: Option<u64>,
) -> Result<Vec<vendors::Model>, DomainError> {
    vendors::Entity::find()
        .filter(vendors::Column::CoupleId.eq(couple_id))
        .order_by_desc(vendors::Column::CreatedAt)
        .order_by_desc(vendors::Column::Id)
        .limit(limit)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    id: i64,
) -> Result<vendors::Model, DomainError> {
    vendors::Entity::find_by_id(id)
        .filter(vendors::Column::CoupleId.eq(couple_id))
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| not_found(id))
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    dto: VendorCreate,
) -> Result<vendors::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    vendors::ActiveModel {
        id: NotSet,
        couple_id: Set(couple_id.to_string()),
        name: Set(dto.name),
        category: Set(dto.category.as_str().to_string()),
        contact: Set(dto.contact),
        cost: Set(dto.cost),
        pros: Set(dto.pros),
        cons: Set(dto.cons),
        status: Set(dto.status),
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
    dto: VendorUpdate,
) -> Result<vendors::Model, DomainError> {
    let mut active: vendors::ActiveModel = find(conn, couple_id, id).await?.into();

    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(category) = dto.category {
        active.category = Set(category.as_str().to_string());
    }
    if let Some(contact) = dto.contact {
        active.contact = Set(contact);
    }
    if let Some(cost) = dto.cost {
        active.cost = Set(cost);
    }
    if let Some(pros) = dto.pros {
        active.pros = Set(pros);
    }
    if let Some(cons) = dto.cons {
        active.cons = Set(cons);
    }
    if let Some(status) = dto.status {
        active.status = Set(status);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await.map_err(map_db_err)
}

pub async fn delete<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    id: i64,
) -> Result<(), DomainError> {
    let result = vendors::Entity::delete_many()
        .filter(vendors::Column::Id.eq(id))
        .filter(vendors::Column::CoupleId.eq(couple_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    if result.rows_affected == 0 {
        return Err(not_found(id));
    }
    Ok(())
}
