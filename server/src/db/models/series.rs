//! Book Series Model
//!
//! A bundle of books sold together. Pricing is derived on read by
//! `catalog::pricing`; deleting a series clears `series_id` on its member
//! books in the same transaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BookSeries {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeriesCreate {
    #[validate(length(min = 1, message = "Tên bộ sách không được để trống"))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeriesUpdate {
    #[validate(length(min = 1, message = "Tên bộ sách không được để trống"))]
    pub name: Option<String>,
    pub description: Option<String>,
}
