//! API Route Modules
//!
//! One module per resource, each exposing a `router()` merged here.
//!
//! # Surface
//!
//! - [`auth`] — register / login / current session
//! - [`addresses`] — customer address book (ownership-scoped)
//! - [`cart`] — customer cart, stock-bounded quantities
//! - [`books`] — admin CRUD plus the public storefront reads
//! - [`authors`], [`categories`], [`publishers`] — taxonomy CRUD with
//!   usage-guarded deletion
//! - [`book_series`] — bundle CRUD, derived pricing, cascading deletion
//! - [`upload`] — media upload, listing, deletion and file serving
//! - [`users`] — admin-only account listing
//! - [`health`] — liveness probe

pub mod health;

pub mod auth;
pub mod upload;
pub mod users;

// Customer-facing
pub mod addresses;
pub mod cart;

// Catalog
pub mod authors;
pub mod book_series;
pub mod books;
pub mod categories;
pub mod publishers;

use axum::Router;

use crate::core::ServerState;

/// Compose the full application router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router())
        .merge(users::router())
        .merge(addresses::router())
        .merge(cart::router())
        .merge(books::router())
        .merge(authors::router())
        .merge(categories::router())
        .merge(publishers::router())
        .merge(book_series::router())
        .merge(upload::router())
}
