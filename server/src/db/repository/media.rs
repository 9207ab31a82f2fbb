//! Media Repository

use chrono::Utc;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::Media;

/// Insert payload assembled by the upload handler after the file is on disk
pub struct MediaInsert {
    pub filename: String,
    pub original_name: String,
    pub mime_type: String,
    pub size: i64,
    pub path: String,
    pub url: String,
    pub hash: String,
    pub uploader_id: i64,
}

#[derive(Clone)]
pub struct MediaRepository {
    pool: SqlitePool,
}

impl MediaRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Media>> {
        let media = sqlx::query_as::<_, Media>(
            "SELECT * FROM media WHERE deleted_at IS NULL ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(media)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Media>> {
        let media = sqlx::query_as::<_, Media>(
            "SELECT * FROM media WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(media)
    }

    /// Reuse an earlier upload with identical content when present
    pub async fn find_by_hash(&self, hash: &str) -> RepoResult<Option<Media>> {
        let media = sqlx::query_as::<_, Media>(
            "SELECT * FROM media WHERE hash = ? AND deleted_at IS NULL",
        )
        .bind(hash)
        .fetch_optional(&self.pool)
        .await?;
        Ok(media)
    }

    pub async fn create(&self, data: MediaInsert) -> RepoResult<Media> {
        let now = Utc::now();
        let media = sqlx::query_as::<_, Media>(
            r#"
            INSERT INTO media
                (filename, original_name, mime_type, size, path, url, hash,
                 uploader_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.filename)
        .bind(&data.original_name)
        .bind(&data.mime_type)
        .bind(data.size)
        .bind(&data.path)
        .bind(&data.url)
        .bind(&data.hash)
        .bind(data.uploader_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(media)
    }

    /// Soft delete the row only; book/author references are left dangling
    /// on purpose and resolved with a placeholder at display time.
    pub async fn delete(&self, id: i64) -> RepoResult<Media> {
        let media = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Không tìm thấy tệp {}", id)))?;

        let now = Utc::now();
        sqlx::query("UPDATE media SET deleted_at = ?, updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(media)
    }
}
