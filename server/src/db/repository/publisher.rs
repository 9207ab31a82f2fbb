//! Publisher Repository
//!
//! Deletion lives in `catalog::deletion` (usage-guarded by books).

use chrono::Utc;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Publisher, PublisherCreate, PublisherUpdate};

#[derive(Clone)]
pub struct PublisherRepository {
    pool: SqlitePool,
}

impl PublisherRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Publisher>> {
        let publishers = sqlx::query_as::<_, Publisher>(
            "SELECT * FROM publishers WHERE deleted_at IS NULL ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(publishers)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Publisher>> {
        let publisher = sqlx::query_as::<_, Publisher>(
            "SELECT * FROM publishers WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(publisher)
    }

    pub async fn create(&self, data: PublisherCreate) -> RepoResult<Publisher> {
        let now = Utc::now();
        let publisher = sqlx::query_as::<_, Publisher>(
            r#"
            INSERT INTO publishers (name, description, image_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.image_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(publisher)
    }

    /// Partial update; `imageId: null` clears the image, absent keeps it
    pub async fn update(&self, id: i64, data: PublisherUpdate) -> RepoResult<Publisher> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Không tìm thấy nhà xuất bản {}", id)))?;

        let image_id = match data.image_id {
            Some(value) => value,
            None => existing.image_id,
        };

        let publisher = sqlx::query_as::<_, Publisher>(
            r#"
            UPDATE publishers SET name = ?, description = ?, image_id = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(data.name.unwrap_or(existing.name))
        .bind(data.description.or(existing.description))
        .bind(image_id)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(publisher)
    }
}
