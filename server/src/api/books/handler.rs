//! Book API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::auth::{CurrentUser, permissions};
use crate::core::ServerState;
use crate::db::models::{Book, BookCreate, BookPublic, BookUpdate};
use crate::db::repository::BookRepository;
use crate::utils::{AppError, AppResult, validate_payload};
use shared::response::DeletedBody;

/// Public book detail with its gallery urls
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailResponse {
    #[serde(flatten)]
    pub book: BookPublic,
    pub gallery: Vec<String>,
}

/// GET /books - all books, any status (console)
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Book>>> {
    current_user.require(permissions::CONSOLE_VIEW)?;

    let repo = BookRepository::new(state.get_db());
    let books = repo.find_all().await?;
    Ok(Json(books))
}

/// GET /books/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Book>> {
    current_user.require(permissions::CONSOLE_VIEW)?;

    let repo = BookRepository::new(state.get_db());
    let book = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy sách {}", id)))?;
    Ok(Json(book))
}

/// POST /books - create a book with optional gallery
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<BookCreate>,
) -> AppResult<Json<Book>> {
    current_user.require(permissions::CATALOG_MANAGE)?;
    validate_payload(&payload)?;

    let repo = BookRepository::new(state.get_db());
    let book = repo.create(payload).await?;

    tracing::info!(book_id = book.id, "Created book");
    Ok(Json(book))
}

/// PATCH /books/{id} - partial update; explicit `null` clears a reference
pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<BookUpdate>,
) -> AppResult<Json<Book>> {
    current_user.require(permissions::CATALOG_MANAGE)?;
    validate_payload(&payload)?;

    let repo = BookRepository::new(state.get_db());
    let book = repo.update(id, payload).await?;
    Ok(Json(book))
}

/// DELETE /books/{id} - soft delete
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeletedBody>> {
    current_user.require(permissions::CATALOG_MANAGE)?;

    let repo = BookRepository::new(state.get_db());
    repo.delete(id).await?;

    tracing::info!(book_id = id, "Soft-deleted book");
    Ok(Json(DeletedBody::ok()))
}

/// GET /public/books - storefront listing with display joins
pub async fn list_public(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<BookPublic>>> {
    let repo = BookRepository::new(state.get_db());
    let books = repo.find_public().await?;
    Ok(Json(books))
}

/// GET /public/books/{id} - storefront detail with gallery
pub async fn get_public_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BookDetailResponse>> {
    let repo = BookRepository::new(state.get_db());
    let book = repo
        .find_public_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy sách {}", id)))?;
    let gallery = repo.gallery_urls(id).await?;
    Ok(Json(BookDetailResponse { book, gallery }))
}
