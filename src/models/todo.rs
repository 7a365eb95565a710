use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A todo item as stored and returned by the API.
///
/// Ids are scoped to the owning user's partition and restart at 1 for each
/// user; they are not globally unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input structure for creating a todo.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TodoInput {
    /// The title of the todo. Must be between 1 and 255 characters.
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Optional description, up to 1000 characters. Defaults to empty.
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Partial update for a todo. Only fields present in the payload are
/// overwritten; an absent field is left untouched, never reset.
#[derive(Debug, Default, Serialize, Deserialize, Validate)]
pub struct TodoPatch {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub completed: Option<bool>,
}
