//! Authentication and authorization
//!
//! - [`JwtService`] — JWT token service
//! - [`CurrentUser`] — authenticated user context (axum extractor)
//! - [`credential`] — Argon2 password hashing
//! - [`permissions`] — role/action permission predicate

pub mod credential;
pub mod extractor;
pub mod jwt;
pub mod permissions;

pub use extractor::CurrentUser;
pub use jwt::{Claims, JwtConfig, JwtError, JwtService};
pub use permissions::has_permission;
