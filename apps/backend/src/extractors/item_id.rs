use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive integer `{id}` path segment; anything else is 400 `INVALID_ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i64);

fn parse(raw: Option<&str>) -> Result<ItemId, AppError> {
    let raw = raw.ok_or_else(|| AppError::bad_request(ErrorCode::InvalidId, "Missing id"))?;
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(ItemId(id)),
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidId,
            format!("Invalid id: {raw}"),
        )),
    }
}

impl FromRequest for ItemId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse(req.match_info().get("id")))
    }
}
