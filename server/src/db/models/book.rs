//! Book Model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::BookStatus;
use sqlx::FromRow;
use validator::Validate;

/// Book row
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Integer VND, always positive
    pub price: i64,
    /// Units on hand, never negative
    pub stock: i64,
    pub status: BookStatus,
    pub author_id: Option<i64>,
    pub publisher_id: Option<i64>,
    pub category_id: Option<i64>,
    pub series_id: Option<i64>,
    pub thumbnail_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Book joined with display fields for the public catalog
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BookPublic {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i64,
    pub status: BookStatus,
    pub author_id: Option<i64>,
    pub author_name: Option<String>,
    pub publisher_id: Option<i64>,
    pub publisher_name: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub series_id: Option<i64>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookCreate {
    #[validate(length(min = 1, message = "Tên sách không được để trống"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Giá sách phải lớn hơn 0"))]
    pub price: i64,
    #[validate(range(min = 0, message = "Tồn kho không được âm"))]
    #[serde(default)]
    pub stock: i64,
    pub status: Option<BookStatus>,
    pub author_id: Option<i64>,
    pub publisher_id: Option<i64>,
    pub category_id: Option<i64>,
    pub series_id: Option<i64>,
    pub thumbnail_id: Option<i64>,
    /// Ordered gallery media ids
    #[serde(default)]
    pub gallery_ids: Vec<i64>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    #[validate(length(min = 1, message = "Tên sách không được để trống"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Giá sách phải lớn hơn 0"))]
    pub price: Option<i64>,
    #[validate(range(min = 0, message = "Tồn kho không được âm"))]
    pub stock: Option<i64>,
    pub status: Option<BookStatus>,
    #[serde(default, deserialize_with = "serde_helpers::double_option")]
    pub author_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "serde_helpers::double_option")]
    pub publisher_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "serde_helpers::double_option")]
    pub category_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "serde_helpers::double_option")]
    pub series_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "serde_helpers::double_option")]
    pub thumbnail_id: Option<Option<i64>>,
    /// Replaces the whole gallery when present
    pub gallery_ids: Option<Vec<i64>>,
}
