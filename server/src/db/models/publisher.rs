//! Publisher Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublisherCreate {
    #[validate(length(min = 1, message = "Tên nhà xuất bản không được để trống"))]
    pub name: String,
    pub description: Option<String>,
    pub image_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PublisherUpdate {
    #[validate(length(min = 1, message = "Tên nhà xuất bản không được để trống"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "serde_helpers::double_option")]
    pub image_id: Option<Option<i64>>,
}
