//! Book Repository
//!
//! Admin reads return raw rows; public reads join author, publisher,
//! category and thumbnail into `BookPublic` and exclude INACTIVE books.
//! Gallery rows are replaced wholesale inside the book's transaction.

use chrono::Utc;
use shared::BookStatus;
use sqlx::{Sqlite, SqlitePool, Transaction};

use super::{RepoError, RepoResult};
use crate::db::models::{Book, BookCreate, BookPublic, BookUpdate};

#[derive(Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

const PUBLIC_SELECT: &str = r#"
    SELECT
        b.id, b.title, b.description, b.price, b.stock, b.status,
        b.author_id, a.name AS author_name,
        b.publisher_id, p.name AS publisher_name,
        b.category_id, c.name AS category_name,
        b.series_id,
        m.url AS thumbnail_url
    FROM books b
    LEFT JOIN authors a ON a.id = b.author_id AND a.deleted_at IS NULL
    LEFT JOIN publishers p ON p.id = b.publisher_id AND p.deleted_at IS NULL
    LEFT JOIN categories c ON c.id = b.category_id AND c.deleted_at IS NULL
    LEFT JOIN media m ON m.id = b.thumbnail_id AND m.deleted_at IS NULL
"#;

impl BookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All non-deleted books, any status (admin)
    pub async fn find_all(&self) -> RepoResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE deleted_at IS NULL ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }

    /// Storefront listing: ACTIVE and OUT_OF_STOCK books with display joins
    pub async fn find_public(&self) -> RepoResult<Vec<BookPublic>> {
        let sql = format!(
            "{} WHERE b.deleted_at IS NULL AND b.status != ? ORDER BY b.id DESC",
            PUBLIC_SELECT
        );
        let books = sqlx::query_as::<_, BookPublic>(&sql)
            .bind(BookStatus::Inactive)
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    pub async fn find_public_by_id(&self, id: i64) -> RepoResult<Option<BookPublic>> {
        let sql = format!(
            "{} WHERE b.id = ? AND b.deleted_at IS NULL AND b.status != ?",
            PUBLIC_SELECT
        );
        let book = sqlx::query_as::<_, BookPublic>(&sql)
            .bind(id)
            .bind(BookStatus::Inactive)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// Gallery image urls for a book, in display order
    pub async fn gallery_urls(&self, book_id: i64) -> RepoResult<Vec<String>> {
        let urls = sqlx::query_scalar::<_, String>(
            r#"
            SELECT m.url FROM book_gallery g
            JOIN media m ON m.id = g.media_id AND m.deleted_at IS NULL
            WHERE g.book_id = ?
            ORDER BY g.position
            "#,
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(urls)
    }

    async fn replace_gallery(
        tx: &mut Transaction<'_, Sqlite>,
        book_id: i64,
        media_ids: &[i64],
    ) -> RepoResult<()> {
        sqlx::query("DELETE FROM book_gallery WHERE book_id = ?")
            .bind(book_id)
            .execute(&mut **tx)
            .await?;

        for (position, media_id) in media_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO book_gallery (book_id, media_id, position) VALUES (?, ?, ?)",
            )
            .bind(book_id)
            .bind(media_id)
            .bind(position as i64)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    pub async fn create(&self, data: BookCreate) -> RepoResult<Book> {
        let mut tx = self.pool.begin().await?;

        let now = Utc::now();
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books
                (title, description, price, stock, status,
                 author_id, publisher_id, category_id, series_id, thumbnail_id,
                 created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.stock)
        .bind(data.status.unwrap_or(BookStatus::Active))
        .bind(data.author_id)
        .bind(data.publisher_id)
        .bind(data.category_id)
        .bind(data.series_id)
        .bind(data.thumbnail_id)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        if !data.gallery_ids.is_empty() {
            Self::replace_gallery(&mut tx, book.id, &data.gallery_ids).await?;
        }

        tx.commit().await?;
        Ok(book)
    }

    /// Partial update. Nullable references distinguish "absent" (keep)
    /// from explicit `null` (clear); a present `galleryIds` replaces the
    /// whole gallery.
    pub async fn update(&self, id: i64, data: BookUpdate) -> RepoResult<Book> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Book>(
            "SELECT * FROM books WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Không tìm thấy sách {}", id)))?;

        let author_id = data.author_id.unwrap_or(existing.author_id);
        let publisher_id = data.publisher_id.unwrap_or(existing.publisher_id);
        let category_id = data.category_id.unwrap_or(existing.category_id);
        let series_id = data.series_id.unwrap_or(existing.series_id);
        let thumbnail_id = data.thumbnail_id.unwrap_or(existing.thumbnail_id);

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books SET
                title = ?, description = ?, price = ?, stock = ?, status = ?,
                author_id = ?, publisher_id = ?, category_id = ?,
                series_id = ?, thumbnail_id = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(data.title.unwrap_or(existing.title))
        .bind(data.description.or(existing.description))
        .bind(data.price.unwrap_or(existing.price))
        .bind(data.stock.unwrap_or(existing.stock))
        .bind(data.status.unwrap_or(existing.status))
        .bind(author_id)
        .bind(publisher_id)
        .bind(category_id)
        .bind(series_id)
        .bind(thumbnail_id)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(gallery_ids) = &data.gallery_ids {
            Self::replace_gallery(&mut tx, id, gallery_ids).await?;
        }

        tx.commit().await?;
        Ok(book)
    }

    /// Soft delete; cart items referencing the book are left in place and
    /// filtered out of cart reads.
    pub async fn delete(&self, id: i64) -> RepoResult<()> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE books SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound(format!("Không tìm thấy sách {}", id)));
        }
        Ok(())
    }
}
