use sea_orm::ConnectionTrait;
use time::Date;
use tracing::info;

use crate::domain::couple::check_can_join;
use crate::entities::{couples, users};
use crate::error::AppError;
use crate::repos::couples as couples_repo;
use crate::repos::users as users_repo;

/// A couple and the people in it.
#[derive(Debug, Clone)]
pub struct CoupleView {
    pub couple: couples::Model,
    pub members: Vec<users::Model>,
}

/// Create a couple with the caller as its first member.
pub async fn create_for<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
    wedding_date: Option<Date>,
) -> Result<CoupleView, AppError> {
    let user = users_repo::require_user(conn, user_id).await?;
    check_can_join(user.couple_id.as_deref(), 0)?;

    let couple = couples_repo::create_couple(conn, wedding_date).await?;
    let member = users_repo::set_couple(conn, user, &couple.id).await?;

    info!(user_id, couple_id = %couple.id, "couple created");
    Ok(CoupleView {
        couple,
        members: vec![member],
    })
}

/// Add the caller to an existing couple.
pub async fn join<C: ConnectionTrait>(
    conn: &C,
    user_id: &str,
    couple_id: &str,
) -> Result<CoupleView, AppError> {
    let user = users_repo::require_user(conn, user_id).await?;
    let couple = couples_repo::lock_couple(conn, couple_id).await?;
    let members = users_repo::count_couple_members(conn, &couple.id).await?;
    check_can_join(user.couple_id.as_deref(), members)?;

    users_repo::set_couple(conn, user, &couple.id).await?;
    let members = users_repo::list_couple_members(conn, &couple.id).await?;

    info!(user_id, couple_id = %couple.id, "couple joined");
    Ok(CoupleView { couple, members })
}

pub async fn view<C: ConnectionTrait>(conn: &C, couple_id: &str) -> Result<CoupleView, AppError> {
    let couple = couples_repo::require_couple(conn, couple_id).await?;
    let members = users_repo::list_couple_members(conn, couple_id).await?;
    Ok(CoupleView { couple, members })
}

/// `None` clears the date.
pub async fn set_wedding_date<C: ConnectionTrait>(
    conn: &C,
    couple_id: &str,
    wedding_date: Option<Date>,
) -> Result<CoupleView, AppError> {
    let couple = couples_repo::require_couple(conn, couple_id).await?;
    let couple = couples_repo::set_wedding_date(conn, couple, wedding_date).await?;
    let members = users_repo::list_couple_members(conn, couple_id).await?;
    Ok(CoupleView { couple, members })
}
