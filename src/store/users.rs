use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::auth::password::hash_password;
use crate::error::AppError;
use crate::models::{PublicUser, User};

/// In-memory registry of accounts, keyed by unique email.
///
/// Constructed once at process start and shared across workers through
/// `web::Data`; the mutex serializes access since actix handlers run on a
/// multi-threaded runtime. Accounts are never mutated or deleted, so ids
/// (position + 1) stay stable for the process lifetime.
#[derive(Default)]
pub struct UserStore {
    users: Mutex<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<User>> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create a new account, hashing the password before it is stored.
    ///
    /// The duplicate-email check is case-insensitive and happens under the
    /// same lock as the insert. Returns the public representation; the hash
    /// never leaves the store.
    pub fn create(&self, name: &str, email: &str, password: &str) -> Result<PublicUser, AppError> {
        // Hashing is the slow part; keep it outside the lock.
        let password_hash = hash_password(password)?;

        let mut users = self.lock();
        let needle = email.to_lowercase();
        if users.iter().any(|u| u.email.to_lowercase() == needle) {
            return Err(AppError::EmailTaken);
        }

        let user = User {
            id: users.len() as i32 + 1,
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        let public = PublicUser::from(&user);
        users.push(user);

        Ok(public)
    }

    /// Look up an account by email, case-insensitively.
    pub fn find_by_email(&self, email: &str) -> Option<User> {
        let needle = email.to_lowercase();
        self.lock()
            .iter()
            .find(|u| u.email.to_lowercase() == needle)
            .cloned()
    }

    pub fn find_by_id(&self, id: i32) -> Option<User> {
        self.lock().iter().find(|u| u.id == id).cloned()
    }
}
