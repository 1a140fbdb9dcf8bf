use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::services::users::{self, Account};
use crate::state::app_state::AppState;

/// Public view of an account. Credentials never leave the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub couple_id: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Account> for UserResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.user.id,
            email: account.email,
            name: account.user.name,
            couple_id: account.user.couple_id,
            created_at: account.user.created_at,
        }
    }
}

async fn profile(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let account = users::load_account(db, &user.id).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(account)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/profile", web::get().to(profile));
}
