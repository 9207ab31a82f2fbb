//! Inventory guard
//!
//! Validates requested cart quantities against live stock before a cart
//! mutation is committed. This is a read-then-decide check, not a
//! reservation: stock is only mutated by the order fulfillment path, so two
//! concurrent updates can both pass against a stale read. That race is
//! accepted behavior.

use shared::AppError;
use thiserror::Error;

/// Requested quantity exceeds available stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Số lượng yêu cầu vượt quá tồn kho (còn {available})")]
pub struct InsufficientStock {
    /// Units currently on hand
    pub available: i64,
}

impl From<InsufficientStock> for AppError {
    fn from(e: InsufficientStock) -> Self {
        AppError::insufficient_stock(e.to_string())
    }
}

/// Check a requested quantity against a book's current stock.
///
/// Succeeds iff `requested <= stock`; the boundary `requested == stock`
/// passes. Invoked before every cart item creation and quantity update,
/// never on deletion.
pub fn check_quantity(stock: i64, requested: i64) -> Result<(), InsufficientStock> {
    if requested > stock {
        Err(InsufficientStock { available: stock })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_stock() {
        assert_eq!(check_quantity(10, 3), Ok(()));
    }

    #[test]
    fn test_boundary_equals_stock() {
        assert_eq!(check_quantity(5, 5), Ok(()));
    }

    #[test]
    fn test_exceeds_stock() {
        assert_eq!(
            check_quantity(5, 6),
            Err(InsufficientStock { available: 5 })
        );
    }

    #[test]
    fn test_zero_stock() {
        assert_eq!(
            check_quantity(0, 1),
            Err(InsufficientStock { available: 0 })
        );
    }

    #[test]
    fn test_error_message_carries_available() {
        let err = check_quantity(2, 7).unwrap_err();
        assert!(err.to_string().contains("còn 2"));
    }
}
