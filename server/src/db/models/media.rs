//! Media Model
//!
//! Uploaded file descriptors. Media is referenced (never owned) by book
//! thumbnails/galleries and author/category/publisher images; deleting a
//! media row does not cascade — dangling references are resolved by the
//! presentation layer with a placeholder.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: i64,
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub path: String,
    pub url: String,
    pub hash: String,
    pub uploader_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}
