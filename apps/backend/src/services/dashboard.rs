use sea_orm::ConnectionTrait;
use time::Date;

use crate::domain::budget::BudgetSummary;
use crate::entities::{budget_items, todos, vendors};
use crate::error::AppError;
use crate::repos::{budget, couples as couples_repo, todos as todos_repo, vendors as vendors_repo};

/// Entries per "recent" list.
pub const RECENT_LIMIT: u64 = 5;

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub wedding_date: Option<Date>,
    pub budget: BudgetSummary,
    pub recent_todos: Vec<todos::Model>,
    pub recent_vendors: Vec<vendors::Model>,
    pub recent_budget_items: Vec<budget_items::Model>,
}

/// Overview for `couple_id`. Callers without a couple use `Dashboard::default()`.
///
/// Totals cover every budget item, not just the recent ones shown.
pub async fn load<C: ConnectionTrait>(conn: &C, couple_id: &str) -> Result<Dashboard, AppError> {
    let couple = couples_repo::require_couple(conn, couple_id).await?;

    let amounts = budget::amounts(conn, couple_id).await?;
    let summary = BudgetSummary::from_items(amounts.iter().map(|(a, p)| (*a, p.as_str())))?;

    Ok(Dashboard {
        wedding_date: couple.wedding_date,
        budget: summary,
        recent_todos: todos_repo::list(conn, couple_id, Some(RECENT_LIMIT)).await?,
        recent_vendors: vendors_repo::list(conn, couple_id, Some(RECENT_LIMIT)).await?,
        recent_budget_items: budget::list(conn, couple_id, Some(RECENT_LIMIT)).await?,
    })
}
