//! Author API Handlers
//!
//! Listing is public (the storefront shows author pages); mutations
//! require catalog management. Deletion is usage-guarded by books.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::{CurrentUser, permissions};
use crate::catalog::deletion;
use crate::core::ServerState;
use crate::db::models::{Author, AuthorCreate, AuthorUpdate};
use crate::db::repository::AuthorRepository;
use crate::utils::{AppError, AppResult, validate_payload};
use shared::response::DeletedBody;

/// GET /authors
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Author>>> {
    let repo = AuthorRepository::new(state.get_db());
    let authors = repo.find_all().await?;
    Ok(Json(authors))
}

/// GET /authors/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Author>> {
    let repo = AuthorRepository::new(state.get_db());
    let author = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy tác giả {}", id)))?;
    Ok(Json(author))
}

/// POST /authors
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<AuthorCreate>,
) -> AppResult<Json<Author>> {
    current_user.require(permissions::CATALOG_MANAGE)?;
    validate_payload(&payload)?;

    let repo = AuthorRepository::new(state.get_db());
    let author = repo.create(payload).await?;
    Ok(Json(author))
}

/// PATCH /authors/{id}
pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<AuthorUpdate>,
) -> AppResult<Json<Author>> {
    current_user.require(permissions::CATALOG_MANAGE)?;
    validate_payload(&payload)?;

    let repo = AuthorRepository::new(state.get_db());
    let author = repo.update(id, payload).await?;
    Ok(Json(author))
}

/// DELETE /authors/{id} - fails with the blocking count while books
/// still reference the author
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeletedBody>> {
    current_user.require(permissions::CATALOG_MANAGE)?;

    deletion::delete_guarded(&state.db, deletion::AUTHOR, id).await?;
    Ok(Json(DeletedBody::ok()))
}
