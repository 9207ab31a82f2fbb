//! Utility modules

pub mod logger;
pub mod validation;

// Re-export unified error types from shared for crate-local use
pub use shared::{AppError, AppResult};
pub use validation::validate_payload;
