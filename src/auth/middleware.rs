use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage, ResponseError,
};
use futures::future::{ready, LocalBoxFuture, Ready};

use crate::auth::token::TokenService;
use crate::error::AppError;

/// Request-level authentication gate.
///
/// Wrapped around the protected scope; each request either gets verified
/// claims attached to its extensions or is short-circuited into a rejection
/// response before it reaches any handler. Login and register stay reachable
/// without a token.
pub struct AuthGuard;

impl<S, B> Transform<S, ServiceRequest> for AuthGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGuardService { service }))
    }
}

pub struct AuthGuardService<S> {
    service: S,
}

/// Pull the credential out of an `Authorization` header value.
///
/// The token must be the second whitespace-separated word after a literal
/// `Bearer` marker. Anything else counts as "no token provided".
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("Bearer"), Some(token)) => Some(token),
        _ => None,
    }
}

impl<S, B> Service<ServiceRequest> for AuthGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Register and login are the only unauthenticated endpoints inside
        // the guarded scope.
        let path = req.path();
        if path.ends_with("/auth/login") || path.ends_with("/auth/register") {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let token = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .map(str::to_owned);

        let verified = match token {
            None => Err(AppError::MissingToken),
            Some(token) => match req.app_data::<web::Data<TokenService>>() {
                Some(tokens) => tokens.verify(&token),
                None => Err(AppError::Internal("TokenService not registered".into())),
            },
        };

        match verified {
            Ok(claims) => {
                req.extensions_mut().insert(claims);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(app_err) => {
                let response = app_err.error_response().map_into_right_body();
                Box::pin(ready(Ok(req.into_response(response))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        // Extra parts after the token are ignored.
        assert_eq!(bearer_token("Bearer abc trailing"), Some("abc"));
    }

    #[test]
    fn test_bearer_token_rejects_malformed_schemes() {
        assert_eq!(bearer_token(""), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("bearer abc"), None);
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("abc.def.ghi"), None);
    }
}
