use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::require_db;
use crate::domain::fields;
use crate::entities::budget_items;
use crate::error::AppError;
use crate::extractors::{CoupleScope, CurrentUser, ItemId, ValidatedJson};
use crate::repos::budget::{self as repo, BudgetItemCreate, BudgetItemUpdate};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBudgetItemRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub item: String,
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub paid_by: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBudgetItemRequest {
    pub category: Option<String>,
    pub item: Option<String>,
    pub amount: Option<i64>,
    pub paid_by: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BudgetItemResponse {
    pub id: i64,
    pub category: String,
    pub item: String,
    pub amount: i64,
    pub paid_by: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<budget_items::Model> for BudgetItemResponse {
    fn from(m: budget_items::Model) -> Self {
        Self {
            id: m.id,
            category: m.category,
            item: m.item,
            amount: m.amount,
            paid_by: m.paid_by,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

async fn list_budget_items(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let Some(couple_id) = user.couple_id else {
        return Ok(HttpResponse::Ok().json(Vec::<BudgetItemResponse>::new()));
    };

    let db = require_db(&app_state)?;
    let items = repo::list(db, &couple_id, None).await?;
    Ok(HttpResponse::Ok().json(
        items
            .into_iter()
            .map(BudgetItemResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn create_budget_item(
    scope: CoupleScope,
    body: ValidatedJson<CreateBudgetItemRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let dto = BudgetItemCreate {
        category: fields::required("category", &req.category)?,
        item: fields::required("item", &req.item)?,
        amount: fields::positive_amount("amount", req.amount)?,
        paid_by: fields::required("paid_by", &req.paid_by)?,
    };

    let db = require_db(&app_state)?;
    let item = repo::create(db, &scope.couple_id, dto).await?;
    Ok(HttpResponse::Created().json(BudgetItemResponse::from(item)))
}

async fn update_budget_item(
    scope: CoupleScope,
    id: ItemId,
    body: ValidatedJson<UpdateBudgetItemRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    fields::ensure_changes(
        req.category.is_some() || req.item.is_some() || req.amount.is_some() || req.paid_by.is_some(),
    )?;

    let dto = BudgetItemUpdate {
        category: req
            .category
            .map(|c| fields::required("category", &c))
            .transpose()?,
        item: req.item.map(|i| fields::required("item", &i)).transpose()?,
        amount: req
            .amount
            .map(|a| fields::positive_amount("amount", a))
            .transpose()?,
        paid_by: req
            .paid_by
            .map(|p| fields::required("paid_by", &p))
            .transpose()?,
    };

    let db = require_db(&app_state)?;
    let item = repo::update(db, &scope.couple_id, id.0, dto).await?;
    Ok(HttpResponse::Ok().json(BudgetItemResponse::from(item)))
}

async fn delete_budget_item(
    scope: CoupleScope,
    id: ItemId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    repo::delete(db, &scope.couple_id, id.0).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_budget_items))
            .route(web::post().to(create_budget_item)),
    )
    .service(
        web::resource("/{id}")
            .route(web::patch().to(update_budget_item))
            .route(web::delete().to(delete_budget_item)),
    );
}
