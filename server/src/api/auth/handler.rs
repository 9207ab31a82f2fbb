//! Auth API Handlers
//!
//! Registration always produces a CUSTOMER account; staff roles are
//! assigned out of band. Login failures return one generic message so the
//! response does not reveal whether the email exists.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::Role;

use crate::auth::{CurrentUser, credential};
use crate::core::ServerState;
use crate::db::models::{User, UserCreate};
use crate::db::repository::UserRepository;
use crate::utils::{AppError, AppResult, validate_payload};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// POST /auth/register - create a CUSTOMER account
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<AuthResponse>> {
    validate_payload(&payload)?;

    let password_hash = credential::hash_password(&payload.password)?;
    let repo = UserRepository::new(state.get_db());
    let user = repo.create(&payload, password_hash, Role::Customer).await?;

    let token = state
        .get_jwt_service()
        .generate_token(user.id, &user.email, user.role.as_str())
        .map_err(|e| AppError::internal(e.to_string()))?;

    tracing::info!(user_id = user.id, "Registered new customer account");
    Ok(Json(AuthResponse { token, user }))
}

/// POST /auth/login - exchange credentials for a JWT
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_email(&payload.email)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !credential::verify_password(&payload.password, &user.password_hash) {
        tracing::warn!(email = %payload.email, "Failed login attempt");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .get_jwt_service()
        .generate_token(user.id, &user.email, user.role.as_str())
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok(Json(AuthResponse { token, user }))
}

/// GET /auth/me - the authenticated user's own record
pub async fn me(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<User>> {
    let repo = UserRepository::new(state.get_db());
    let user = repo
        .find_by_id(current_user.id)
        .await?
        .ok_or_else(|| AppError::not_found("Không tìm thấy tài khoản"))?;
    Ok(Json(user))
}
