use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};

use crate::auth::claims::ClaimSet;
use crate::error::AppError;

/// The authenticated caller, as resolved by `JwtExtract`.
///
/// Taken straight from the token, so `couple_id` may lag behind the
/// database until the client swaps in a re-issued token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub couple_id: Option<String>,
}

impl From<ClaimSet> for CurrentUser {
    fn from(claims: ClaimSet) -> Self {
        Self {
            id: claims.subject_id,
            email: claims.email,
            couple_id: claims.group_id,
        }
    }
}

impl CurrentUser {
    pub fn claims(&self) -> ClaimSet {
        ClaimSet::new(self.id.clone(), self.email.clone()).with_group(self.couple_id.clone())
    }

    /// Claims are absent when a route was mounted outside the JwtExtract scope.
    pub(crate) fn from_extensions(req: &HttpRequest) -> Result<Self, AppError> {
        let claims = req.extensions().get::<ClaimSet>().cloned();
        claims.map(CurrentUser::from).ok_or_else(AppError::unauthorized)
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::from_extensions(req))
    }
}
