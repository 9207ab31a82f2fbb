//! API response body shapes
//!
//! Success responses carry the resource JSON directly. Errors always use
//! [`ErrorBody`]: `{"error": "<message>"}`.

use serde::{Deserialize, Serialize};

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message
    pub error: String,
}

/// Acknowledgement body for delete operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedBody {
    pub deleted: bool,
}

impl DeletedBody {
    pub fn ok() -> Self {
        Self { deleted: true }
    }
}
