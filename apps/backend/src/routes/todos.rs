use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::db::require_db;
use crate::domain::fields;
use crate::entities::todos;
use crate::error::AppError;
use crate::extractors::{CoupleScope, CurrentUser, ItemId, ValidatedJson};
use crate::repos::todos::{self as repo, TodoCreate, TodoUpdate};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub due_date: Option<Date>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub content: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub due_date: Option<Option<Date>>,
    pub is_completed: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub content: String,
    pub due_date: Option<Date>,
    pub is_completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<todos::Model> for TodoResponse {
    fn from(m: todos::Model) -> Self {
        Self {
            id: m.id,
            content: m.content,
            due_date: m.due_date,
            is_completed: m.is_completed,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

async fn list_todos(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let Some(couple_id) = user.couple_id else {
        return Ok(HttpResponse::Ok().json(Vec::<TodoResponse>::new()));
    };

    let db = require_db(&app_state)?;
    let todos = repo::list(db, &couple_id, None).await?;
    Ok(HttpResponse::Ok().json(todos.into_iter().map(TodoResponse::from).collect::<Vec<_>>()))
}

async fn create_todo(
    scope: CoupleScope,
    body: ValidatedJson<CreateTodoRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let CreateTodoRequest { content, due_date } = body.into_inner();
    let dto = TodoCreate {
        content: fields::required("content", &content)?,
        due_date,
    };

    let db = require_db(&app_state)?;
    let todo = repo::create(db, &scope.couple_id, dto).await?;
    Ok(HttpResponse::Created().json(TodoResponse::from(todo)))
}

async fn update_todo(
    scope: CoupleScope,
    id: ItemId,
    body: ValidatedJson<UpdateTodoRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let UpdateTodoRequest {
        content,
        due_date,
        is_completed,
    } = body.into_inner();
    fields::ensure_changes(content.is_some() || due_date.is_some() || is_completed.is_some())?;

    let dto = TodoUpdate {
        content: content
            .map(|c| fields::required("content", &c))
            .transpose()?,
        due_date,
        is_completed,
    };

    let db = require_db(&app_state)?;
    let todo = repo::update(db, &scope.couple_id, id.0, dto).await?;
    Ok(HttpResponse::Ok().json(TodoResponse::from(todo)))
}

async fn delete_todo(
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
            .route(web::get().to(list_todos))
            .route(web::post().to(create_todo)),
    )
    .service(
        web::resource("/{id}")
            .route(web::patch().to(update_todo))
            .route(web::delete().to(delete_todo)),
    );
}
