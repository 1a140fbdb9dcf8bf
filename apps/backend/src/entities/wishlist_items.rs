use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wishlist_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "couple_id")]
    pub couple_id: String,
    #[sea_orm(column_name = "item_name")]
    pub item_name: String,
    #[sea_orm(column_name = "item_url", column_type = "Text", nullable)]
    pub item_url: Option<String>,
    pub price: Option<i64>,
    #[sea_orm(column_name = "is_purchased")]
    pub is_purchased: bool,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
