use crate::{
    auth::{verify_password, AuthResponse, AuthedUser, LoginRequest, RegisterRequest, TokenService},
    error::AppError,
    models::PublicUser,
    store::UserStore,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use validator::Validate;

/// Register a new user
///
/// Creates a new account and returns it together with an issued token.
#[post("/register")]
pub async fn register(
    users: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    register_data.validate()?;

    let user = users.create(
        &register_data.name,
        &register_data.email,
        &register_data.password,
    )?;

    let token = tokens.issue(&user)?;

    Ok(HttpResponse::Created().json(AuthResponse { user, token }))
}

/// Login user
///
/// Authenticates a user and returns an authentication token. Unknown email
/// and wrong password produce the same response.
#[post("/login")]
pub async fn login(
    users: web::Data<UserStore>,
    tokens: web::Data<TokenService>,
    login_data: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    // Validate input
    login_data.validate()?;

    let user = users
        .find_by_email(&login_data.email)
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&login_data.password, &user.password_hash)? {
        return Err(AppError::InvalidCredentials);
    }

    let public = PublicUser::from(&user);
    let token = tokens.issue(&public)?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: public,
        token,
    }))
}

/// Current user profile
///
/// Returns the identity claims the auth guard attached to the request.
#[get("/me")]
pub async fn me(user: AuthedUser) -> Result<impl Responder, AppError> {
    Ok(HttpResponse::Ok().json(user.0))
}
