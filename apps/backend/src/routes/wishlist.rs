use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::require_db;
use crate::domain::fields;
use crate::entities::wishlist_items;
use crate::error::AppError;
use crate::extractors::{CoupleScope, CurrentUser, ItemId, ValidatedJson};
use crate::repos::wishlist::{self as repo, WishlistItemCreate, WishlistItemUpdate};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateWishlistItemRequest {
    #[serde(default)]
    pub item_name: String,
    pub item_url: Option<String>,
    pub price: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateWishlistItemRequest {
    pub item_name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub item_url: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub price: Option<Option<i64>>,
    pub is_purchased: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct WishlistItemResponse {
    pub id: i64,
    pub item_name: String,
    pub item_url: Option<String>,
    pub price: Option<i64>,
    pub is_purchased: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<wishlist_items::Model> for WishlistItemResponse {
    fn from(m: wishlist_items::Model) -> Self {
        Self {
            id: m.id,
            item_name: m.item_name,
            item_url: m.item_url,
            price: m.price,
            is_purchased: m.is_purchased,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

async fn list_wishlist(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let Some(couple_id) = user.couple_id else {
        return Ok(HttpResponse::Ok().json(Vec::<WishlistItemResponse>::new()));
    };

    let db = require_db(&app_state)?;
    let items = repo::list(db, &couple_id, None).await?;
    Ok(HttpResponse::Ok().json(
        items
            .into_iter()
            .map(WishlistItemResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn create_wishlist_item(
    scope: CoupleScope,
    body: ValidatedJson<CreateWishlistItemRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let dto = WishlistItemCreate {
        item_name: fields::required("item_name", &req.item_name)?,
        item_url: fields::optional(req.item_url),
        price: req.price,
    };

    let db = require_db(&app_state)?;
    let item = repo::create(db, &scope.couple_id, dto).await?;
    Ok(HttpResponse::Created().json(WishlistItemResponse::from(item)))
}

async fn update_wishlist_item(
    scope: CoupleScope,
    id: ItemId,
    body: ValidatedJson<UpdateWishlistItemRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    fields::ensure_changes(
        req.item_name.is_some()
            || req.item_url.is_some()
            || req.price.is_some()
            || req.is_purchased.is_some(),
    )?;

    let dto = WishlistItemUpdate {
        item_name: req
            .item_name
            .map(|n| fields::required("item_name", &n))
            .transpose()?,
        item_url: req.item_url.map(fields::optional),
        price: req.price,
        is_purchased: req.is_purchased,
    };

    let db = require_db(&app_state)?;
    let item = repo::update(db, &scope.couple_id, id.0, dto).await?;
    Ok(HttpResponse::Ok().json(WishlistItemResponse::from(item)))
}

async fn delete_wishlist_item(
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
            .route(web::get().to(list_wishlist))
            .route(web::post().to(create_wishlist_item)),
    )
    .service(
        web::resource("/{id}")
            .route(web::patch().to(update_wishlist_item))
            .route(web::delete().to(delete_wishlist_item)),
    );
}
