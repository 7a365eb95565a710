use actix_web::dev::Payload;
use actix_web::{Error as ActixError, FromRequest, HttpMessage, HttpRequest};
use std::future::{ready, Ready};

use crate::auth::token::Claims;
use crate::error::AppError;

/// Extracts the authenticated identity from request extensions.
///
/// Intended for routes behind [`crate::auth::AuthGuard`], which verifies the
/// bearer token and inserts the decoded [`Claims`]. If no claims are present
/// the request never passed the guard, so the extractor rejects it.
#[derive(Debug, Clone)]
pub struct AuthedUser(pub Claims);

impl AuthedUser {
    /// The caller's user id, as used to key store partitions.
    pub fn id(&self) -> i32 {
        self.0.id
    }
}

impl FromRequest for AuthedUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.extensions().get::<Claims>().cloned() {
            Some(claims) => ready(Ok(AuthedUser(claims))),
            None => ready(Err(AppError::MissingToken.into())),
        }
    }
}
