//! Repository Module
//!
//! CRUD operations per entity over the SQLite pool. Reads filter
//! `deleted_at IS NULL` explicitly at every query; nothing relies on an
//! implicit global filter.

// Accounts
pub mod address;
pub mod user;

// Catalog
pub mod author;
pub mod book;
pub mod category;
pub mod publisher;
pub mod series;

// Commerce
pub mod cart;

// Media
pub mod media;

// Re-exports
pub use address::AddressRepository;
pub use author::AuthorRepository;
pub use book::BookRepository;
pub use cart::CartRepository;
pub use category::CategoryRepository;
pub use media::{MediaInsert, MediaRepository};
pub use publisher::PublisherRepository;
pub use series::SeriesRepository;
pub use user::UserRepository;

use shared::AppError;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Duplicate(msg) => AppError::already_exists(msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
