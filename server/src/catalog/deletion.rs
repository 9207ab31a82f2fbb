//! Taxonomy deletion coordinator
//!
//! Soft deletion for catalog taxonomy entities with two behaviors:
//!
//! - **Usage-guarded** (categories, authors, publishers): an entity still
//!   referenced by non-deleted books cannot be deleted; the error carries
//!   the blocking count.
//! - **Cascading** (book series): deletion always succeeds and clears
//!   `series_id` on every referencing book inside the same transaction, so
//!   no book ever observably references a deleted series.
//!
//! Media deletion does not cascade; dangling thumbnail/gallery references
//! are tolerated and resolved by the presentation layer.

use chrono::Utc;
use shared::{AppError, AppResult};
use sqlx::SqlitePool;

/// A "books depend on this entity" relation, parameterizing the usage guard
#[derive(Debug, Clone, Copy)]
pub struct DependentRelation {
    /// Entity table name
    pub table: &'static str,
    /// Foreign key column on `books` pointing at the entity
    pub fk_column: &'static str,
    /// Display name used in error messages
    pub label: &'static str,
}

/// Categories referenced by `books.category_id`
pub const CATEGORY: DependentRelation = DependentRelation {
    table: "categories",
    fk_column: "category_id",
    label: "danh mục",
};

/// Authors referenced by `books.author_id`
pub const AUTHOR: DependentRelation = DependentRelation {
    table: "authors",
    fk_column: "author_id",
    label: "tác giả",
};

/// Publishers referenced by `books.publisher_id`
pub const PUBLISHER: DependentRelation = DependentRelation {
    table: "publishers",
    fk_column: "publisher_id",
    label: "nhà xuất bản",
};

/// Usage-guarded soft delete.
///
/// Counts non-deleted books referencing the entity; fails with a 400 and
/// the blocking count when the entity is still in use, with 404 when the
/// entity is missing or already soft-deleted. Performs no mutation on
/// failure.
pub async fn delete_guarded(
    pool: &SqlitePool,
    rel: DependentRelation,
    id: i64,
) -> AppResult<()> {
    let exists: i64 = sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM {} WHERE id = ? AND deleted_at IS NULL",
        rel.table
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    if exists == 0 {
        return Err(AppError::not_found(format!(
            "Không tìm thấy {} {}",
            rel.label, id
        )));
    }

    let count: i64 = sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM books WHERE {} = ? AND deleted_at IS NULL",
        rel.fk_column
    ))
    .bind(id)
    .fetch_one(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    if count > 0 {
        return Err(AppError::in_use(format!(
            "Không thể xóa {} vì có {} cuốn sách đang sử dụng",
            rel.label, count
        )));
    }

    let now = Utc::now();
    sqlx::query(&format!(
        "UPDATE {} SET deleted_at = ?, updated_at = ? WHERE id = ?",
        rel.table
    ))
    .bind(now)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!(table = rel.table, id, "Soft-deleted taxonomy entity");
    Ok(())
}

/// Cascading series deletion.
///
/// Unconditionally permitted (no usage guard). Marks the series
/// soft-deleted and clears `series_id` on every book referencing it, both
/// inside one transaction — a reader never observes a book pointing at a
/// deleted series.
pub async fn delete_series(pool: &SqlitePool, id: i64) -> AppResult<()> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let exists: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM book_series WHERE id = ? AND deleted_at IS NULL")
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

    if exists == 0 {
        return Err(AppError::not_found(format!(
            "Không tìm thấy bộ sách {}",
            id
        )));
    }

    let now = Utc::now();
    sqlx::query("UPDATE book_series SET deleted_at = ?, updated_at = ? WHERE id = ?")
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    sqlx::query("UPDATE books SET series_id = NULL, updated_at = ? WHERE series_id = ?")
        .bind(now)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tx.commit()
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    tracing::info!(id, "Soft-deleted book series and detached member books");
    Ok(())
}
