//! Author Repository
//!
//! Deletion lives in `catalog::deletion` (usage-guarded by books).

use chrono::Utc;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Author, AuthorCreate, AuthorUpdate};

#[derive(Clone)]
pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE deleted_at IS NULL ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(authors)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT * FROM authors WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(author)
    }

    pub async fn create(&self, data: AuthorCreate) -> RepoResult<Author> {
        let now = Utc::now();
        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (name, description, image_id, created_at, updated_at)
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
        Ok(author)
    }

    /// Partial update; `imageId: null` clears the image, absent keeps it
    pub async fn update(&self, id: i64, data: AuthorUpdate) -> RepoResult<Author> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Không tìm thấy tác giả {}", id)))?;

        let image_id = match data.image_id {
            Some(value) => value,
            None => existing.image_id,
        };

        let author = sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors SET name = ?, description = ?, image_id = ?, updated_at = ?
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
        Ok(author)
    }
}
