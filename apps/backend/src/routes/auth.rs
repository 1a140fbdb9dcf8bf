use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::users::UserResponse;
use crate::auth::issue_token;
use crate::db::require_db;
use crate::db::txn::with_txn;
use crate::domain::fields;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::logging::security;
use crate::services::users::{self, Account};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

fn respond(app_state: &AppState, account: Account) -> Result<AuthResponse, AppError> {
    let token = issue_token(&account.claims(), SystemTime::now(), &app_state.security)?;
    Ok(AuthResponse {
        user: UserResponse::from(account),
        token,
    })
}

/// Register a new account and sign it in. The token carries no couple yet.
async fn signup(
    body: ValidatedJson<SignupRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let SignupRequest {
        email,
        name,
        password,
    } = body.into_inner();

    let email = fields::normalize_email(&email)?;
    let name = fields::required("name", &name)?;
    fields::check_password(&password)?;

    let hasher = app_state.hasher.clone();
    let password_hash = web::block(move || hasher.hash(&password)).await??;

    let account = with_txn(&app_state, |txn| {
        Box::pin(async move { users::register(txn, email, &name, password_hash).await })
    })
    .await?;

    Ok(HttpResponse::Created().json(respond(&app_state, account)?))
}

/// Unknown email and wrong password produce the same 401.
async fn login(
    body: ValidatedJson<LoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let LoginRequest { email, password } = body.into_inner();

    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "Email and password are required",
        ));
    }

    let db = require_db(&app_state)?;
    let hasher = app_state.hasher.clone();

    let Some(credentials) = users::credentials_for_login(db, &email).await? else {
        web::block(move || hasher.verify_unknown(&password)).await?;
        security::login_failed("unknown_email", &email);
        return Err(AppError::invalid_credentials());
    };

    let stored = credentials.password_hash.clone();
    match web::block(move || hasher.verify(&password, &stored)).await? {
        Ok(true) => {}
        Ok(false) => {
            security::login_failed("wrong_password", &email);
            return Err(AppError::invalid_credentials());
        }
        Err(e) => {
            security::credential_corrupted(&credentials.user_id);
            return Err(e.into());
        }
    }

    let account = users::complete_login(db, credentials).await?;
    Ok(HttpResponse::Ok().json(respond(&app_state, account)?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/signup").route(web::post().to(signup)))
        .service(web::resource("/login").route(web::post().to(login)));
}
