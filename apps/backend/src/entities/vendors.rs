use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "vendors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "couple_id")]
    pub couple_id: String,
    pub name: String,
    /// One of `crate::domain::vendor::VendorCategory`, stored by name
    pub category: String,
    pub contact: Option<String>,
    /// Whole currency units
    pub cost: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub pros: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub cons: Option<String>,
    pub status: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: OffsetDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
