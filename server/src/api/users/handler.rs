//! User Admin API Handlers (ADMIN only)

use axum::{
    Json,
    extract::{Path, State},
};

use crate::auth::{CurrentUser, permissions};
use crate::core::ServerState;
use crate::db::models::User;
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult};

/// GET /users - list all accounts
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<User>>> {
    current_user.require(permissions::USERS_MANAGE)?;

    let repo = UserRepository::new(state.get_db());
    let users = repo.find_all().await?;
    Ok(Json(users))
}

/// GET /users/{id} - fetch one account
pub async fn get_by_id(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    current_user.require(permissions::USERS_MANAGE)?;

    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy tài khoản {}", id)))?;
    Ok(Json(user))
}
