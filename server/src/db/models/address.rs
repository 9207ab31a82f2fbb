//! Address Model
//!
//! Shipping addresses owned by a user. At most one non-deleted address per
//! user carries `is_default = true`; the repository maintains the invariant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Shipping address
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub note: Option<String>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressCreate {
    #[validate(length(min = 1, message = "Tên người nhận không được để trống"))]
    pub name: String,
    #[validate(length(min = 1, message = "Số điện thoại không được để trống"))]
    pub phone: String,
    #[validate(length(min = 1, message = "Địa chỉ không được để trống"))]
    pub address: String,
    pub note: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdate {
    #[validate(length(min = 1, message = "Tên người nhận không được để trống"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Số điện thoại không được để trống"))]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Địa chỉ không được để trống"))]
    pub address: Option<String>,
    pub note: Option<String>,
    pub is_default: Option<bool>,
}
