//! Shared types for the bookstore backend
//!
//! Wire-level types used by the server and any API clients:
//! - `error`: unified error codes with HTTP status mapping
//! - `response`: response body shapes
//! - `types`: roles, book status, derived series pricing

pub mod error;
pub mod response;
pub mod types;

pub use error::{AppError, AppResult, ErrorCode};
pub use response::ErrorBody;
pub use types::{BookStatus, Role, SeriesAvailability, SeriesPricing};
