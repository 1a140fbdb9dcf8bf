use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::auth::issue_token;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::fields;
use crate::error::AppError;
use crate::extractors::{CoupleScope, CurrentUser, ValidatedJson};
use crate::services::couples::{self, CoupleView};
use crate::state::app_state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CreateCoupleRequest {
    #[serde(default)]
    pub wedding_date: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct JoinCoupleRequest {
    #[serde(default)]
    pub couple_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCoupleRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub wedding_date: Option<Option<Date>>,
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CoupleResponse {
    pub id: String,
    pub wedding_date: Option<Date>,
    pub members: Vec<MemberResponse>,
}

impl From<CoupleView> for CoupleResponse {
    fn from(view: CoupleView) -> Self {
        Self {
            id: view.couple.id,
            wedding_date: view.couple.wedding_date,
            members: view
                .members
                .into_iter()
                .map(|m| MemberResponse {
                    id: m.id,
                    name: m.name,
                })
                .collect(),
        }
    }
}

/// Membership changes come with a fresh token so the new couple is
/// visible to the gate on the very next request.
#[derive(Debug, Serialize)]
pub struct MembershipResponse {
    pub couple: CoupleResponse,
    pub token: String,
}

fn membership(
    app_state: &AppState,
    user: &CurrentUser,
    view: CoupleView,
) -> Result<MembershipResponse, AppError> {
    let claims = user.claims().with_group(Some(view.couple.id.clone()));
    let token = issue_token(&claims, SystemTime::now(), &app_state.security)?;
    Ok(MembershipResponse {
        couple: CoupleResponse::from(view),
        token,
    })
}

async fn create_couple(
    user: CurrentUser,
    body: ValidatedJson<CreateCoupleRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let wedding_date = body.into_inner().wedding_date;
    let user_id = user.id.clone();

    let view = with_txn(&app_state, |txn| {
        Box::pin(async move { couples::create_for(txn, &user_id, wedding_date).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(membership(&app_state, &user, view)?))
}

async fn join_couple(
    user: CurrentUser,
    body: ValidatedJson<JoinCoupleRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let couple_id = fields::required("couple_id", &body.couple_id)?;
    let user_id = user.id.clone();

    let view = with_txn(&app_state, |txn| {
        Box::pin(async move { couples::join(txn, &user_id, &couple_id).await })
    })
    .await?;

    Ok(HttpResponse::Ok().json(membership(&app_state, &user, view)?))
}

async fn my_couple(
    scope: CoupleScope,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let view = couples::view(db, &scope.couple_id).await?;
    Ok(HttpResponse::Ok().json(CoupleResponse::from(view)))
}

async fn update_my_couple(
    scope: CoupleScope,
    body: ValidatedJson<UpdateCoupleRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let UpdateCoupleRequest { wedding_date } = body.into_inner();
    fields::ensure_changes(wedding_date.is_some())?;

    let db = require_db(&app_state)?;
    let view = couples::set_wedding_date(db, &scope.couple_id, wedding_date.flatten()).await?;
    Ok(HttpResponse::Ok().json(CoupleResponse::from(view)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(create_couple)))
        .service(web::resource("/join").route(web::post().to(join_couple)))
        .service(
            web::resource("/me")
                .route(web::get().to(my_couple))
                .route(web::patch().to(update_my_couple)),
        );
}
