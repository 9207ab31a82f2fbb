//! Media API Module
//!
//! Upload, listing and deletion are gated by `media:manage`; serving the
//! stored files is public (storefront images).

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/media", post(handler::upload).get(handler::list))
        .route(
            "/media/{id}",
            get(handler::get_by_id).delete(handler::delete),
        )
        // Public file serving, referenced by Media.url
        .route("/media/files/{filename}", get(handler::serve_file))
}
