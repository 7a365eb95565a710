use crate::{
    auth::AuthedUser,
    error::AppError,
    models::{TodoInput, TodoPatch},
    store::TodoStore,
};
use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use serde_json::json;
use validator::Validate;

/// Create a new todo for the authenticated user.
///
/// The owner is always the caller's authenticated id; a client cannot create
/// into another user's partition.
#[post("")]
pub async fn create_todo(
    store: web::Data<TodoStore>,
    user: AuthedUser,
    todo_data: web::Json<TodoInput>,
) -> Result<impl Responder, AppError> {
    todo_data.validate()?;

    let todo = store.create(user.id(), todo_data.into_inner());

    Ok(HttpResponse::Created().json(todo))
}

/// List all todos owned by the authenticated user, in insertion order.
#[get("")]
pub async fn list_todos(
    store: web::Data<TodoStore>,
    user: AuthedUser,
) -> Result<impl Responder, AppError> {
    let todos = store.list_by_owner(user.id());

    Ok(HttpResponse::Ok().json(todos))
}

/// Retrieve one todo by id, scoped to the caller's partition.
#[get("/{id}")]
pub async fn get_todo(
    store: web::Data<TodoStore>,
    user: AuthedUser,
    todo_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let todo = store
        .get_by_id(user.id(), todo_id.into_inner())
        .ok_or_else(|| AppError::NotFound("Todo not found".into()))?;

    Ok(HttpResponse::Ok().json(todo))
}

/// Partially update a todo. Only fields present in the payload are changed.
#[patch("/{id}")]
pub async fn update_todo(
    store: web::Data<TodoStore>,
    user: AuthedUser,
    todo_id: web::Path<i32>,
    patch_data: web::Json<TodoPatch>,
) -> Result<impl Responder, AppError> {
    patch_data.validate()?;

    let todo = store
        .update(user.id(), todo_id.into_inner(), patch_data.into_inner())
        .ok_or_else(|| AppError::NotFound("Todo not found".into()))?;

    Ok(HttpResponse::Ok().json(todo))
}

/// Delete a todo from the caller's partition.
#[delete("/{id}")]
pub async fn delete_todo(
    store: web::Data<TodoStore>,
    user: AuthedUser,
    todo_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    if !store.delete(user.id(), todo_id.into_inner()) {
        return Err(AppError::NotFound("Todo not found".into()));
    }

    Ok(HttpResponse::Ok().json(json!({
        "message": "Todo deleted successfully"
    })))
}
