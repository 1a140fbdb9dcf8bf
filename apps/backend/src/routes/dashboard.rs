use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::Date;

use super::budget::BudgetItemResponse;
use super::todos::TodoResponse;
use super::vendors::VendorResponse;
use crate::db::require_db;
use crate::error::AppError;
use crate::extractors::CurrentUser;
use crate::services::dashboard::{self, Dashboard};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub wedding_date: Option<Date>,
    pub total_budget: i64,
    pub spent_amount: i64,
    pub remaining_budget: i64,
    pub recent_todos: Vec<TodoResponse>,
    pub recent_vendors: Vec<VendorResponse>,
    pub recent_budget_items: Vec<BudgetItemResponse>,
}

impl From<Dashboard> for DashboardResponse {
    fn from(d: Dashboard) -> Self {
        Self {
            wedding_date: d.wedding_date,
            total_budget: d.budget.total,
            spent_amount: d.budget.spent,
            remaining_budget: d.budget.remaining,
            recent_todos: d.recent_todos.into_iter().map(Into::into).collect(),
            recent_vendors: d.recent_vendors.into_iter().map(Into::into).collect(),
            recent_budget_items: d.recent_budget_items.into_iter().map(Into::into).collect(),
        }
    }
}

async fn overview(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let summary = match user.couple_id {
        Some(couple_id) => {
            let db = require_db(&app_state)?;
            dashboard::load(db, &couple_id).await?
        }
        None => Dashboard::default(),
    };
    Ok(HttpResponse::Ok().json(DashboardResponse::from(summary)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(overview));
}
