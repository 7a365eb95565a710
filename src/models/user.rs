use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full account record as held by the user directory.
///
/// Deliberately does not derive `Serialize`: the password hash must never
/// leave the store layer in a response body. Convert to [`PublicUser`]
/// before returning anything outward.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Outward representation of an account, with the hash stripped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublicUser {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}
