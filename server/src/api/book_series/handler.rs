//! Book Series API Handlers
//!
//! Pricing and availability are derived per request by
//! `catalog::pricing` from the current member books; nothing is stored.
//! Deletion cascades: member books are detached in the same transaction.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::{BookStatus, SeriesAvailability, SeriesPricing};

use crate::auth::{CurrentUser, permissions};
use crate::catalog::{deletion, pricing};
use crate::core::ServerState;
use crate::db::models::{Book, BookSeries, SeriesCreate, SeriesUpdate};
use crate::db::repository::SeriesRepository;
use crate::utils::{AppError, AppResult, validate_payload};
use shared::response::DeletedBody;

/// Storefront list entry: the series augmented with derived
/// `totalPrice`/`discountedPrice`/`discount` and `allInStock`/`minStock`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesListItem {
    #[serde(flatten)]
    pub series: BookSeries,
    #[serde(flatten)]
    pub pricing: SeriesPricing,
    #[serde(flatten)]
    pub availability: SeriesAvailability,
    pub book_count: usize,
}

/// Storefront detail: the series with visible member books, augmented
/// with the derived pricing fields
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDetailResponse {
    #[serde(flatten)]
    pub series: BookSeries,
    pub books: Vec<Book>,
    #[serde(flatten)]
    pub pricing: SeriesPricing,
}

/// GET /book-series - console listing, no derived pricing
pub async fn list(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<BookSeries>>> {
    current_user.require(permissions::CONSOLE_VIEW)?;

    let repo = SeriesRepository::new(state.get_db());
    let series = repo.find_all().await?;
    Ok(Json(series))
}

/// GET /book-series/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<BookSeries>> {
    current_user.require(permissions::CONSOLE_VIEW)?;

    let repo = SeriesRepository::new(state.get_db());
    let series = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy bộ sách {}", id)))?;
    Ok(Json(series))
}

/// POST /book-series
pub async fn create(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<SeriesCreate>,
) -> AppResult<Json<BookSeries>> {
    current_user.require(permissions::CATALOG_MANAGE)?;
    validate_payload(&payload)?;

    let repo = SeriesRepository::new(state.get_db());
    let series = repo.create(payload).await?;
    Ok(Json(series))
}

/// PATCH /book-series/{id}
pub async fn update(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<SeriesUpdate>,
) -> AppResult<Json<BookSeries>> {
    current_user.require(permissions::CATALOG_MANAGE)?;
    validate_payload(&payload)?;

    let repo = SeriesRepository::new(state.get_db());
    let series = repo.update(id, payload).await?;
    Ok(Json(series))
}

/// DELETE /book-series/{id} - always succeeds; member books are detached
/// in the same transaction
pub async fn delete(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeletedBody>> {
    current_user.require(permissions::CATALOG_MANAGE)?;

    deletion::delete_series(&state.db, id).await?;
    Ok(Json(DeletedBody::ok()))
}

/// GET /public/book-series - listing with pricing and availability
pub async fn list_public(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<SeriesListItem>>> {
    let repo = SeriesRepository::new(state.get_db());
    let all = repo.find_all().await?;

    let mut items = Vec::with_capacity(all.len());
    for series in all {
        let books = repo.find_member_books(series.id).await?;
        items.push(SeriesListItem {
            pricing: pricing::price_series(&books),
            availability: pricing::series_availability(&books),
            book_count: books.len(),
            series,
        });
    }
    Ok(Json(items))
}

/// GET /public/book-series/{id} - detail with visible member books
pub async fn get_public_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SeriesDetailResponse>> {
    let repo = SeriesRepository::new(state.get_db());
    let series = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy bộ sách {}", id)))?;

    let members = repo.find_member_books(id).await?;
    let pricing = pricing::price_series(&members);

    // Hidden books stay out of the response but in the pricing input,
    // where the ACTIVE filter applies uniformly
    let books = members
        .into_iter()
        .filter(|b| b.status != BookStatus::Inactive)
        .collect();

    Ok(Json(SeriesDetailResponse {
        series,
        books,
        pricing,
    }))
}
