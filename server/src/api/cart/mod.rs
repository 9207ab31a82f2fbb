//! Cart API Module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/cart", get(handler::get_cart))
        .route("/cart/items", post(handler::add_item))
        .route(
            "/cart/items/{id}",
            axum::routing::patch(handler::update_item).delete(handler::remove_item),
        )
}
