use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::db::require_db;
use crate::domain::fields;
use crate::domain::vendor::{VendorCategory, DEFAULT_VENDOR_STATUS};
use crate::entities::vendors;
use crate::error::AppError;
use crate::extractors::{CoupleScope, CurrentUser, ItemId, ValidatedJson};
use crate::repos::vendors::{self as repo, VendorCreate, VendorUpdate};
use crate::state::app_state::AppState;

/// `category` stays a string here so an unknown value is a validation
/// error rather than a JSON error.
#[derive(Debug, Deserialize)]
pub struct CreateVendorRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub contact: Option<String>,
    pub cost: Option<i64>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVendorRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub contact: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cost: Option<Option<i64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub pros: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub cons: Option<Option<String>>,
    pub status: Option<String>,
}

impl UpdateVendorRequest {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.contact.is_none()
            && self.cost.is_none()
            && self.pros.is_none()
            && self.cons.is_none()
            && self.status.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct VendorResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub contact: Option<String>,
    pub cost: Option<i64>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<vendors::Model> for VendorResponse {
    fn from(m: vendors::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            category: m.category,
            contact: m.contact,
            cost: m.cost,
            pros: m.pros,
            cons: m.cons,
            status: m.status,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

async fn list_vendors(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let Some(couple_id) = user.couple_id else {
        return Ok(HttpResponse::Ok().json(Vec::<VendorResponse>::new()));
    };

    let db = require_db(&app_state)?;
    let vendors = repo::list(db, &couple_id, None).await?;
    Ok(HttpResponse::Ok().json(
        vendors
            .into_iter()
            .map(VendorResponse::from)
            .collect::<Vec<_>>(),
    ))
}

async fn create_vendor(
    scope: CoupleScope,
    body: ValidatedJson<CreateVendorRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let dto = VendorCreate {
        name: fields::required("name", &req.name)?,
        category: fields::required("category", &req.category)?.parse::<VendorCategory>()?,
        contact: fields::optional(req.contact),
        cost: req.cost,
        pros: fields::optional(req.pros),
        cons: fields::optional(req.cons),
        status: fields::optional(req.status).unwrap_or_else(|| DEFAULT_VENDOR_STATUS.to_string()),
    };

    let db = require_db(&app_state)?;
    let vendor = repo::create(db, &scope.couple_id, dto).await?;
    Ok(HttpResponse::Created().json(VendorResponse::from(vendor)))
}

async fn update_vendor(
    scope: CoupleScope,
    id: ItemId,
    body: ValidatedJson<UpdateVendorRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    fields::ensure_changes(!req.is_empty())?;

    let dto = VendorUpdate {
        name: req.name.map(|n| fields::required("name", &n)).transpose()?,
        category: req
            .category
            .map(|c| c.parse::<VendorCategory>())
            .transpose()?,
        contact: req.contact.map(fields::optional),
        cost: req.cost,
        pros: req.pros.map(fields::optional),
        cons: req.cons.map(fields::optional),
        status: req
            .status
            .map(|s| fields::required("status", &s))
            .transpose()?,
    };

    let db = require_db(&app_state)?;
    let vendor = repo::update(db, &scope.couple_id, id.0, dto).await?;
    Ok(HttpResponse::Ok().json(VendorResponse::from(vendor)))
}

async fn delete_vendor(
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
            .route(web::get().to(list_vendors))
            .route(web::post().to(create_vendor)),
    )
    .service(
        web::resource("/{id}")
            .route(web::patch().to(update_vendor))
            .route(web::delete().to(delete_vendor)),
    );
}
