//! Book Series Repository
//!
//! Pricing is never stored here; handlers derive it per read via
//! `catalog::pricing` from the member books returned by
//! `find_member_books`. Cascading deletion lives in `catalog::deletion`.

use chrono::Utc;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Book, BookSeries, SeriesCreate, SeriesUpdate};

#[derive(Clone)]
pub struct SeriesRepository {
    pool: SqlitePool,
}

impl SeriesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<BookSeries>> {
        let series = sqlx::query_as::<_, BookSeries>(
            "SELECT * FROM book_series WHERE deleted_at IS NULL ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(series)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<BookSeries>> {
        let series = sqlx::query_as::<_, BookSeries>(
            "SELECT * FROM book_series WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(series)
    }

    /// Non-deleted member books of a series, pricing/availability input
    pub async fn find_member_books(&self, series_id: i64) -> RepoResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE series_id = ? AND deleted_at IS NULL ORDER BY id",
        )
        .bind(series_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    pub async fn create(&self, data: SeriesCreate) -> RepoResult<BookSeries> {
        let now = Utc::now();
        let series = sqlx::query_as::<_, BookSeries>(
            r#"
            INSERT INTO book_series (name, description, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(series)
    }

    pub async fn update(&self, id: i64, data: SeriesUpdate) -> RepoResult<BookSeries> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Không tìm thấy bộ sách {}", id)))?;

        let series = sqlx::query_as::<_, BookSeries>(
            r#"
            UPDATE book_series SET name = ?, description = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(data.name.unwrap_or(existing.name))
        .bind(data.description.or(existing.description))
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(series)
    }
}
