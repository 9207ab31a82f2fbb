//! Address Repository
//!
//! Maintains the single-default-address invariant: for a given non-deleted
//! user, at most one non-deleted address has `is_default = 1`. Every path
//! that sets a default runs demote-then-promote inside one transaction, so
//! a concurrent reader never observes two defaults. A partial unique index
//! (`idx_addresses_sole_default`) backs the invariant at the schema level.

use chrono::Utc;
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::{RepoError, RepoResult};
use crate::db::models::{Address, AddressCreate, AddressUpdate};

#[derive(Clone)]
pub struct AddressRepository {
    pool: SqlitePool,
}

impl AddressRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All non-deleted addresses of a user, default first
    pub async fn find_all_for_user(&self, user_id: i64) -> RepoResult<Vec<Address>> {
        let addresses = sqlx::query_as::<_, Address>(
            r#"
            SELECT * FROM addresses
            WHERE user_id = ? AND deleted_at IS NULL
            ORDER BY is_default DESC, id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(addresses)
    }

    /// Find a non-deleted address owned by the user
    pub async fn find_owned(&self, user_id: i64, id: i64) -> RepoResult<Option<Address>> {
        let address = sqlx::query_as::<_, Address>(
            "SELECT * FROM addresses WHERE id = ? AND user_id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(address)
    }

    /// Flip is_default off on every other non-deleted address of the user.
    /// Touches only the is_default field.
    async fn demote_others(
        tx: &mut Transaction<'_, Sqlite>,
        user_id: i64,
        keep_id: Option<i64>,
    ) -> RepoResult<()> {
        sqlx::query(
            r#"
            UPDATE addresses SET is_default = 0
            WHERE user_id = ? AND is_default = 1 AND deleted_at IS NULL
              AND id != ?
            "#,
        )
        .bind(user_id)
        .bind(keep_id.unwrap_or(-1))
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Create an address; `is_default = true` demotes any existing default
    /// in the same transaction.
    pub async fn create(&self, user_id: i64, data: AddressCreate) -> RepoResult<Address> {
        let mut tx = self.pool.begin().await?;

        if data.is_default {
            Self::demote_others(&mut tx, user_id, None).await?;
        }

        let now = Utc::now();
        let address = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (user_id, name, phone, address, note, is_default, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(&data.name)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.note)
        .bind(data.is_default)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(address)
    }

    /// Update an address; `is_default: true` triggers the same atomic
    /// demote-then-promote sequence as `set_default`.
    pub async fn update(
        &self,
        user_id: i64,
        id: i64,
        data: AddressUpdate,
    ) -> RepoResult<Address> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Address>(
            "SELECT * FROM addresses WHERE id = ? AND user_id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Không tìm thấy địa chỉ {}", id)))?;

        if data.is_default == Some(true) {
            Self::demote_others(&mut tx, user_id, Some(id)).await?;
        }

        let now = Utc::now();
        let address = sqlx::query_as::<_, Address>(
            r#"
            UPDATE addresses SET
                name = ?,
                phone = ?,
                address = ?,
                note = ?,
                is_default = ?,
                updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(data.name.unwrap_or(existing.name))
        .bind(data.phone.unwrap_or(existing.phone))
        .bind(data.address.unwrap_or(existing.address))
        .bind(data.note.or(existing.note))
        .bind(data.is_default.unwrap_or(existing.is_default))
        .bind(now)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(address)
    }

    /// Make the target address the user's sole default.
    ///
    /// One atomic unit: every other non-deleted default of the user is
    /// flipped to false, then the target is promoted. Already being the
    /// sole default makes this a no-op.
    pub async fn set_default(&self, user_id: i64, id: i64) -> RepoResult<Address> {
        let mut tx = self.pool.begin().await?;

        let exists: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM addresses WHERE id = ? AND user_id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        if exists == 0 {
            return Err(RepoError::NotFound(format!(
                "Không tìm thấy địa chỉ {}",
                id
            )));
        }

        Self::demote_others(&mut tx, user_id, Some(id)).await?;

        let address = sqlx::query_as::<_, Address>(
            "UPDATE addresses SET is_default = 1 WHERE id = ? RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(address)
    }

    /// Soft delete an address.
    ///
    /// If it was the default, is_default is forced off in the same
    /// statement, leaving the user with zero defaults until a caller picks
    /// a new one. No auto-promotion.
    pub async fn delete(&self, user_id: i64, id: i64) -> RepoResult<()> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            UPDATE addresses SET deleted_at = ?, is_default = 0, updated_at = ?
            WHERE id = ? AND user_id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!(
                "Không tìm thấy địa chỉ {}",
                id
            )));
        }
        Ok(())
    }
}
