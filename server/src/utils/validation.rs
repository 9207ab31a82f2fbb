//! Request payload validation
//!
//! Bridges `validator` derive output to the wire error shape: the first
//! field message becomes the 400 body.

use shared::{AppError, AppResult};
use validator::Validate;

/// Validate a deserialized payload, surfacing the first field message
pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate().map_err(|errors| {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field| field.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Dữ liệu không hợp lệ".to_string());
        AppError::validation(message)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "Tên không được để trống"))]
        name: String,
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = Payload {
            name: "x".to_string(),
        };
        assert!(validate_payload(&payload).is_ok());
    }

    #[test]
    fn test_invalid_payload_surfaces_message() {
        let payload = Payload {
            name: String::new(),
        };
        let err = validate_payload(&payload).unwrap_err();
        assert_eq!(err.message, "Tên không được để trống");
    }
}
