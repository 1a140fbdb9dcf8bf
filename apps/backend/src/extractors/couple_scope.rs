use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use super::current_user::CurrentUser;
use crate::error::AppError;

/// A caller who belongs to a couple. Anyone else gets 400 `COUPLE_REQUIRED`.
///
/// The couple always comes from the token, never from the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoupleScope {
    pub user_id: String,
    pub couple_id: String,
}

impl TryFrom<CurrentUser> for CoupleScope {
    type Error = AppError;

    fn try_from(user: CurrentUser) -> Result<Self, Self::Error> {
        match user.couple_id {
            Some(couple_id) => Ok(Self {
                user_id: user.id,
                couple_id,
            }),
            None => Err(AppError::couple_required()),
        }
    }
}

impl FromRequest for CoupleScope {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(CurrentUser::from_extensions(req).and_then(CoupleScope::try_from))
    }
}
