//!
//! # Error Handling
//!
//! This module defines the `AppError` type used across the application. The
//! core modules (stores, token service, credential helpers) return typed
//! failures; the HTTP boundary maps each variant to a status code and a
//! stable, user-safe message via `actix_web::error::ResponseError`.
//!
//! `From` implementations for `bcrypt::BcryptError` and
//! `validator::ValidationErrors` let handlers bubble those failures up with
//! the `?` operator.

use actix_web::{error::ResponseError, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Typed failures raised by the core and mapped to HTTP at the boundary.
#[derive(Debug)]
pub enum AppError {
    /// Request input failed validation before reaching the core (HTTP 400).
    Validation(String),
    /// Login failed. Unknown email and wrong password deliberately collapse
    /// into this one variant so responses cannot be used to probe which
    /// accounts exist (HTTP 401).
    InvalidCredentials,
    /// No usable bearer token in the `Authorization` header (HTTP 401).
    MissingToken,
    /// Structurally valid token whose time window has elapsed (HTTP 401).
    TokenExpired,
    /// Bad signature, malformed payload, or wrong algorithm (HTTP 403).
    TokenInvalid,
    /// Requested resource does not exist in the caller's partition (HTTP 404).
    NotFound(String),
    /// Registration attempted with an email that is already registered,
    /// compared case-insensitively (HTTP 409).
    EmailTaken,
    /// Unexpected server-side failure (HTTP 500). The payload is logged,
    /// never sent to the client.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::MissingToken => write!(f, "No token provided"),
            AppError::TokenExpired => write!(f, "Token has expired"),
            AppError::TokenInvalid => write!(f, "Invalid or malformed token"),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::EmailTaken => write!(f, "Email already registered"),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(msg) => HttpResponse::BadRequest().json(json!({
                "error": msg
            })),
            AppError::InvalidCredentials => HttpResponse::Unauthorized().json(json!({
                "error": "Invalid credentials"
            })),
            AppError::MissingToken => HttpResponse::Unauthorized().json(json!({
                "error": "No token provided. Please include Authorization header with Bearer token."
            })),
            AppError::TokenExpired => HttpResponse::Unauthorized().json(json!({
                "error": "Token has expired. Please login again."
            })),
            AppError::TokenInvalid => HttpResponse::Forbidden().json(json!({
                "error": "Invalid or malformed token."
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(json!({
                "error": msg
            })),
            AppError::EmailTaken => HttpResponse::Conflict().json(json!({
                "error": "Email already registered"
            })),
            AppError::Internal(detail) => {
                // Detail stays in the server log only.
                log::error!("internal error: {}", detail);
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Internal(error.to_string())
    }
}
