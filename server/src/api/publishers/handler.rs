//! Publisher API Handlers
//!
//! Same shape as categories: public reads, gated mutations,
//! usage-guarded deletion.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::{CurrentUser, permissions};
use crate::catalog::deletion;
use crate::core::ServerState;
use crate::db::models::{Publisher, PublisherCreate, PublisherUpdate};
use crate::db::repository::PublisherRepository;
use crate::utils::{AppError, AppResult, validate_payload};
use shared::response::DeletedBody;

/// GET /publishers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Publisher>>> {
    let repo = PublisherRepository::new(state.get_db());
    let publishers = repo.find_all().await?;
    Ok(Json(publishers))
}

/// GET /publishers/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Publisher>> {
    let repo = PublisherRepository::new(state.get_db());
    let publisher = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy nhà xuất bản {}", id)))?;
    Ok(Json(publisher))
}

/// POST /publishers
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<PublisherCreate>,
) -> AppResult<Json<Publisher>> {
    current_user.require(permissions::CATALOG_MANAGE)?;
    validate_payload(&payload)?;

    let repo = PublisherRepository::new(state.get_db());
    let publisher = repo.create(payload).await?;
    Ok(Json(publisher))
}

/// PATCH /publishers/{id}
pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<PublisherUpdate>,
) -> AppResult<Json<Publisher>> {
    current_user.require(permissions::CATALOG_MANAGE)?;
    validate_payload(&payload)?;

    let repo = PublisherRepository::new(state.get_db());
    let publisher = repo.update(id, payload).await?;
    Ok(Json(publisher))
}

/// DELETE /publishers/{id} - usage-guarded soft delete
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeletedBody>> {
    current_user.require(permissions::CATALOG_MANAGE)?;

    deletion::delete_guarded(&state.db, deletion::PUBLISHER, id).await?;
    Ok(Json(DeletedBody::ok()))
}
