//! User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::Role;
use sqlx::FromRow;
use validator::Validate;

/// User account
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Registration payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    #[validate(email(message = "Email không hợp lệ"))]
    pub email: String,
    #[validate(length(min = 8, message = "Mật khẩu phải có ít nhất 8 ký tự"))]
    pub password: String,
    #[validate(length(min = 1, message = "Họ tên không được để trống"))]
    pub full_name: String,
}
