use crate::error::AppError;
use bcrypt::{hash, verify, DEFAULT_COST};

/// Hash a plaintext password for storage. Salted, slow by design.
///
/// A hashing failure (e.g. resource exhaustion) is an internal error, never
/// a credential error.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Compare a plaintext password against a stored hash.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}
