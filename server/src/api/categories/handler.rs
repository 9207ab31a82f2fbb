//! Category API Handlers
//!
//! Deletion is usage-guarded: a category referenced by non-deleted books
//! returns 400 with the blocking count.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::{CurrentUser, permissions};
use crate::catalog::deletion;
use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult, validate_payload};
use shared::response::DeletedBody;

/// GET /categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::new(state.get_db());
    let categories = repo.find_all().await?;
    Ok(Json(categories))
}

/// GET /categories/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::new(state.get_db());
    let category = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy danh mục {}", id)))?;
    Ok(Json(category))
}

/// POST /categories
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    current_user.require(permissions::CATALOG_MANAGE)?;
    validate_payload(&payload)?;

    let repo = CategoryRepository::new(state.get_db());
    let category = repo.create(payload).await?;
    Ok(Json(category))
}

/// PATCH /categories/{id}
pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    current_user.require(permissions::CATALOG_MANAGE)?;
    validate_payload(&payload)?;

    let repo = CategoryRepository::new(state.get_db());
    let category = repo.update(id, payload).await?;
    Ok(Json(category))
}

/// DELETE /categories/{id} - usage-guarded soft delete
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeletedBody>> {
    current_user.require(permissions::CATALOG_MANAGE)?;

    deletion::delete_guarded(&state.db, deletion::CATEGORY, id).await?;
    Ok(Json(DeletedBody::ok()))
}
