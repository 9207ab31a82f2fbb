//! Cart Repository
//!
//! One cart per user, created lazily on first access. Stock bounds are
//! checked by the handler via `catalog::inventory` before any write here;
//! this layer only persists.

use chrono::Utc;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Cart, CartItem, CartItemWithBook};

#[derive(Clone)]
pub struct CartRepository {
    pool: SqlitePool,
}

impl CartRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Fetch the user's cart, creating it on first access
    pub async fn get_or_create(&self, user_id: i64) -> RepoResult<Cart> {
        if let Some(cart) =
            sqlx::query_as::<_, Cart>("SELECT * FROM carts WHERE user_id = ?")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?
        {
            return Ok(cart);
        }

        let now = Utc::now();
        let cart = sqlx::query_as::<_, Cart>(
            r#"
            INSERT INTO carts (user_id, created_at, updated_at)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(cart)
    }

    /// Cart items joined with their books. Items whose book was
    /// soft-deleted are dropped from the view rather than surfaced.
    pub async fn list_items(&self, cart_id: i64) -> RepoResult<Vec<CartItemWithBook>> {
        let items = sqlx::query_as::<_, CartItemWithBook>(
            r#"
            SELECT
                i.id, i.cart_id, i.book_id, i.quantity,
                b.title AS book_title,
                b.price AS book_price,
                b.stock AS book_stock,
                b.status AS book_status,
                a.name AS author_name,
                m.url AS thumbnail_url
            FROM cart_items i
            JOIN books b ON b.id = i.book_id AND b.deleted_at IS NULL
            LEFT JOIN authors a ON a.id = b.author_id AND a.deleted_at IS NULL
            LEFT JOIN media m ON m.id = b.thumbnail_id AND m.deleted_at IS NULL
            WHERE i.cart_id = ?
            ORDER BY i.id
            "#,
        )
        .bind(cart_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// One cart item joined with its book, for mutation responses
    pub async fn find_item_with_book(
        &self,
        cart_id: i64,
        item_id: i64,
    ) -> RepoResult<Option<CartItemWithBook>> {
        let item = sqlx::query_as::<_, CartItemWithBook>(
            r#"
            SELECT
                i.id, i.cart_id, i.book_id, i.quantity,
                b.title AS book_title,
                b.price AS book_price,
                b.stock AS book_stock,
                b.status AS book_status,
                a.name AS author_name,
                m.url AS thumbnail_url
            FROM cart_items i
            JOIN books b ON b.id = i.book_id AND b.deleted_at IS NULL
            LEFT JOIN authors a ON a.id = b.author_id AND a.deleted_at IS NULL
            LEFT JOIN media m ON m.id = b.thumbnail_id AND m.deleted_at IS NULL
            WHERE i.id = ? AND i.cart_id = ?
            "#,
        )
        .bind(item_id)
        .bind(cart_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    pub async fn find_item(&self, cart_id: i64, item_id: i64) -> RepoResult<Option<CartItem>> {
        let item = sqlx::query_as::<_, CartItem>(
            "SELECT * FROM cart_items WHERE id = ? AND cart_id = ?",
        )
        .bind(item_id)
        .bind(cart_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    pub async fn find_item_by_book(
        &self,
        cart_id: i64,
        book_id: i64,
    ) -> RepoResult<Option<CartItem>> {
        let item = sqlx::query_as::<_, CartItem>(
            "SELECT * FROM cart_items WHERE cart_id = ? AND book_id = ?",
        )
        .bind(cart_id)
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    pub async fn insert_item(
        &self,
        cart_id: i64,
        book_id: i64,
        quantity: i64,
    ) -> RepoResult<CartItem> {
        let now = Utc::now();
        let item = sqlx::query_as::<_, CartItem>(
            r#"
            INSERT INTO cart_items (cart_id, book_id, quantity, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(cart_id)
        .bind(book_id)
        .bind(quantity)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    pub async fn set_quantity(&self, item_id: i64, quantity: i64) -> RepoResult<CartItem> {
        let item = sqlx::query_as::<_, CartItem>(
            r#"
            UPDATE cart_items SET quantity = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(quantity)
        .bind(Utc::now())
        .bind(item_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(item)
    }

    /// Remove an item unconditionally (no stock check on removal)
    pub async fn remove_item(&self, cart_id: i64, item_id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = ? AND cart_id = ?")
            .bind(item_id)
            .bind(cart_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!(
                "Không tìm thấy sản phẩm {} trong giỏ hàng",
                item_id
            )));
        }
        Ok(())
    }
}
