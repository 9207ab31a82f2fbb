//! Category Repository
//!
//! Deletion lives in `catalog::deletion` (usage-guarded by books).

use chrono::Utc;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};

#[derive(Clone)]
pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE deleted_at IS NULL ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: i64) -> RepoResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    pub async fn create(&self, data: CategoryCreate) -> RepoResult<Category> {
        let now = Utc::now();
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, description, image_id, created_at, updated_at)
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
        Ok(category)
    }

    /// Partial update; `imageId: null` clears the image, absent keeps it
    pub async fn update(&self, id: i64, data: CategoryUpdate) -> RepoResult<Category> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Không tìm thấy danh mục {}", id)))?;

        let image_id = match data.image_id {
            Some(value) => value,
            None => existing.image_id,
        };

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories SET name = ?, description = ?, image_id = ?, updated_at = ?
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
        Ok(category)
    }
}
