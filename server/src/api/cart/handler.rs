//! Cart API Handlers
//!
//! Quantities are bounded by current stock via `catalog::inventory` on
//! every add and update. Adding a book already in the cart accumulates,
//! and the bound applies to the combined quantity. Removal is never
//! guarded. The check is advisory: stock may change between the read and
//! the write, and the final authority is order placement.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::BookStatus;

use crate::auth::CurrentUser;
use crate::catalog::inventory;
use crate::core::ServerState;
use crate::db::models::{Book, CartItemCreate, CartItemUpdate, CartItemWithBook};
use crate::db::repository::{BookRepository, CartRepository};
use crate::utils::{AppError, AppResult, validate_payload};
use shared::response::DeletedBody;

/// Cart view: items joined with their books plus a derived total
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub id: i64,
    pub items: Vec<CartItemWithBook>,
    pub total: i64,
}

async fn sellable_book(state: &ServerState, book_id: i64) -> AppResult<Book> {
    let repo = BookRepository::new(state.get_db());
    let book = repo
        .find_by_id(book_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Không tìm thấy sách {}", book_id)))?;

    if book.status == BookStatus::Inactive {
        return Err(AppError::validation("Sách hiện không được bán"));
    }
    Ok(book)
}

/// GET /cart - the user's cart, created lazily on first read
pub async fn get_cart(
    State(state): State<ServerState>,
    current_user: CurrentUser,
) -> AppResult<Json<CartResponse>> {
    let repo = CartRepository::new(state.get_db());
    let cart = repo.get_or_create(current_user.id).await?;
    let items = repo.list_items(cart.id).await?;
    let total = items.iter().map(|i| i.quantity * i.book_price).sum();
    Ok(Json(CartResponse {
        id: cart.id,
        items,
        total,
    }))
}

/// POST /cart/items - add a book; an existing line accumulates and the
/// stock bound applies to the combined quantity
pub async fn add_item(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Json(payload): Json<CartItemCreate>,
) -> AppResult<Json<CartItemWithBook>> {
    validate_payload(&payload)?;

    let book = sellable_book(&state, payload.book_id).await?;

    let repo = CartRepository::new(state.get_db());
    let cart = repo.get_or_create(current_user.id).await?;

    let item = match repo.find_item_by_book(cart.id, payload.book_id).await? {
        Some(existing) => {
            let combined = existing.quantity + payload.quantity;
            inventory::check_quantity(book.stock, combined)?;
            repo.set_quantity(existing.id, combined).await?
        }
        None => {
            inventory::check_quantity(book.stock, payload.quantity)?;
            repo.insert_item(cart.id, payload.book_id, payload.quantity)
                .await?
        }
    };

    let item = repo
        .find_item_with_book(cart.id, item.id)
        .await?
        .ok_or_else(|| AppError::internal("Cart item vanished after write"))?;
    Ok(Json(item))
}

/// PATCH /cart/items/{id} - set an absolute quantity, stock-bounded
pub async fn update_item(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<CartItemUpdate>,
) -> AppResult<Json<CartItemWithBook>> {
    validate_payload(&payload)?;

    let repo = CartRepository::new(state.get_db());
    let cart = repo.get_or_create(current_user.id).await?;
    let item = repo
        .find_item(cart.id, id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Không tìm thấy sản phẩm {} trong giỏ hàng", id))
        })?;

    let book = sellable_book(&state, item.book_id).await?;
    inventory::check_quantity(book.stock, payload.quantity)?;

    repo.set_quantity(item.id, payload.quantity).await?;
    let item = repo
        .find_item_with_book(cart.id, item.id)
        .await?
        .ok_or_else(|| AppError::internal("Cart item vanished after write"))?;
    Ok(Json(item))
}

/// DELETE /cart/items/{id} - remove a line, never stock-guarded
pub async fn remove_item(
    State(state): State<ServerState>,
    current_user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<DeletedBody>> {
    let repo = CartRepository::new(state.get_db());
    let cart = repo.get_or_create(current_user.id).await?;
    repo.remove_item(cart.id, id).await?;
    Ok(Json(DeletedBody::ok()))
}
