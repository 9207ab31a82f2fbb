//! Cart Models
//!
//! One cart per user, created lazily. Cart item quantities are bounded by
//! book stock via `catalog::inventory` at every create/update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::BookStatus;
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub cart_id: i64,
    pub book_id: i64,
    pub quantity: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Cart item joined with its book, author name and thumbnail url
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CartItemWithBook {
    pub id: i64,
    pub cart_id: i64,
    pub book_id: i64,
    pub quantity: i64,
    pub book_title: String,
    pub book_price: i64,
    pub book_stock: i64,
    pub book_status: BookStatus,
    pub author_name: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CartItemCreate {
    pub book_id: i64,
    #[validate(range(min = 1, message = "Số lượng phải lớn hơn 0"))]
    pub quantity: i64,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CartItemUpdate {
    #[validate(range(min = 1, message = "Số lượng phải lớn hơn 0"))]
    pub quantity: i64,
}
