//! Book API Module
//!
//! Admin CRUD under `/books`, public storefront reads under
//! `/public/books`.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/books", admin_routes())
        .nest("/public/books", public_routes())
}

fn admin_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .patch(handler::update)
                .delete(handler::delete),
        )
}

fn public_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_public))
        .route("/{id}", get(handler::get_public_by_id))
}
