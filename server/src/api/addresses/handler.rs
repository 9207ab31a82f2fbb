//! Address API Handlers
//!
//! Every operation filters by the authenticated user's id, so a foreign
//! address id behaves exactly like a missing one (404).

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Address, AddressCreate, AddressUpdate};
use crate::db::repository::AddressRepository;
use crate::utils::{AppError, AppResult, validate_payload};
use shared::response::DeletedBody;

/// GET /addresses - the user's address book, default first
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Address>>> {
    let repo = AddressRepository::new(state.get_db());
    let addresses = repo.find_all_for_user(current_user.id).await?;
    Ok(Json(addresses))
}

/// GET /addresses/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Address>> {
    let repo = AddressRepository::new(state.get_db());
    let address = repo
        .find_owned(current_user.id, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy địa chỉ {}", id)))?;
    Ok(Json(address))
}

/// POST /addresses - create; `isDefault: true` demotes any current default
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<AddressCreate>,
) -> AppResult<Json<Address>> {
    validate_payload(&payload)?;

    let repo = AddressRepository::new(state.get_db());
    let address = repo.create(current_user.id, payload).await?;
    Ok(Json(address))
}

/// PATCH /addresses/{id} - partial update
pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<AddressUpdate>,
) -> AppResult<Json<Address>> {
    validate_payload(&payload)?;

    let repo = AddressRepository::new(state.get_db());
    let address = repo.update(current_user.id, id, payload).await?;
    Ok(Json(address))
}

/// POST /addresses/{id}/default - promote to sole default
pub async fn set_default(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Address>> {
    let repo = AddressRepository::new(state.get_db());
    let address = repo.set_default(current_user.id, id).await?;
    Ok(Json(address))
}

/// DELETE /addresses/{id} - soft delete; no default auto-promotion
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeletedBody>> {
    let repo = AddressRepository::new(state.get_db());
    repo.delete(current_user.id, id).await?;
    Ok(Json(DeletedBody::ok()))
}
