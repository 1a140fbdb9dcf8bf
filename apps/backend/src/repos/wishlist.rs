use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use time::OffsetDateTime;

use crate::entities::wishlist_items;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::infra::db_errors::map_db_err;

pub struct WishlistItemCreate {
    pub item_name: String,
    pub item_url: Option<String>,
    pub price: Option<i64>,
}

#[derive(Default)]
pub struct WishlistItemUpdate {
    pub item_name: Option<String>,
    pub item_url: Option<Option<String>>,
    pub price: Option<Option<i64>>,
    pub is_purchased: Option<bool>,
}

fn not_found(id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::WishlistItem, format!("Wishlist item {id} not found"))
}

pub async fn list<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    limit: Option<u64>,
) -> Result<Vec<wishlist_items::Model>, DomainError> {
    wishlist_items::Entity::find()
        .filter(wishlist_items::Column::CoupleId.eq(couple_id))
        .order_by_desc(wishlist_items::Column::CreatedAt)
        .order_by_desc(wishlist_items::Column::Id)
        .limit(limit)
        .all(conn)
        .await
        .map_err(map_db_err)
}

pub async fn find<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    id: i64,
) -> Result<wishlist_items::Model, DomainError> {
    wishlist_items::Entity::find_by_id(id)
        .filter(wishlist_items::Column::CoupleId.eq(couple_id))
        .one(conn)
        .await
        .map_err(map_db_err)?
        .ok_or_else(|| not_found(id))
}

pub async fn create<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    dto: WishlistItemCreate,
) -> Result<wishlist_items::Model, DomainError> {
    let now = OffsetDateTime::now_utc();
    wishlist_items::ActiveModel {
        id: NotSet,
        couple_id: Set(couple_id.to_string()),
        item_name: Set(dto.item_name),
        item_url: Set(dto.item_url),
        price: Set(dto.price),
        is_purchased: Set(false),
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
    dto: WishlistItemUpdate,
) -> Result<wishlist_items::Model, DomainError> {
    let mut active: wishlist_items::ActiveModel = find(conn, couple_id, id).await?.into();

    if let Some(item_name) = dto.item_name {
        active.item_name = Set(item_name);
    }
    if let Some(item_url) = dto.item_url {
        active.item_url = Set(item_url);
    }
    if let Some(price) = dto.price {
        active.price = Set(price);
    }
    if let Some(purchased) = dto.is_purchased {
        active.is_purchased = Set(purchased);
    }
    active.updated_at = Set(OffsetDateTime::now_utc());

    active.update(conn).await.map_err(map_db_err)
}

pub async fn delete<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    id: i64,
) -> Result<(), DomainError> {
    let result = wishlist_items::Entity::delete_many()
        .filter(wishlist_items::Column::Id.eq(id))
        .filter(wishlist_items::Column::CoupleId.eq(couple_id))
        .exec(conn)
        .await
        .map_err(map_db_err)?;

    if result.rows_affected == 0 {
        return Err(not_found(id));
    }
    Ok(())
}
