//! Shared test fixtures: in-memory database plus seed helpers

use bookstore_server::db::DbService;
use bookstore_server::db::models::{BookCreate, UserCreate};
use bookstore_server::db::repository::{BookRepository, UserRepository};
use shared::{BookStatus, Role};
use sqlx::SqlitePool;

pub async fn test_pool() -> SqlitePool {
    DbService::new_in_memory()
        .await
        .expect("in-memory database")
        .pool
}

pub async fn seed_user(pool: &SqlitePool, email: &str) -> i64 {
    let repo = UserRepository::new(pool.clone());
    let user = repo
        .create(
            &UserCreate {
                email: email.to_string(),
                password: "password123".to_string(),
                full_name: "Test User".to_string(),
            },
            "fake-hash".to_string(),
            Role::Customer,
        )
        .await
        .expect("seed user");
    user.id
}

pub struct SeedBook {
    pub price: i64,
    pub stock: i64,
    pub status: BookStatus,
    pub category_id: Option<i64>,
    pub author_id: Option<i64>,
    pub publisher_id: Option<i64>,
    pub series_id: Option<i64>,
}

impl Default for SeedBook {
    fn default() -> Self {
        Self {
            price: 100_000,
            stock: 10,
            status: BookStatus::Active,
            category_id: None,
            author_id: None,
            publisher_id: None,
            series_id: None,
        }
    }
}

pub async fn seed_book(pool: &SqlitePool, seed: SeedBook) -> i64 {
    let repo = BookRepository::new(pool.clone());
    let book = repo
        .create(BookCreate {
            title: "Seeded Book".to_string(),
            description: None,
            price: seed.price,
            stock: seed.stock,
            status: Some(seed.status),
            author_id: seed.author_id,
            publisher_id: seed.publisher_id,
            category_id: seed.category_id,
            series_id: seed.series_id,
            thumbnail_id: None,
            gallery_ids: Vec::new(),
        })
        .await
        .expect("seed book");
    book.id
}
