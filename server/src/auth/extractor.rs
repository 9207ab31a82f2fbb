//! JWT Extractor
//!
//! Custom extractor for automatically validating JWT tokens.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::Role;
use std::str::FromStr;

use crate::auth::{Claims, JwtError, JwtService, has_permission};
use crate::core::ServerState;
use shared::AppError;

/// Authenticated user context, extracted from a validated JWT
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
    pub role: Role,
}

impl CurrentUser {
    /// Require a gated action, failing with 403 otherwise
    pub fn require(&self, action: &str) -> Result<(), AppError> {
        if has_permission(self.role, action) {
            Ok(())
        } else {
            Err(AppError::forbidden(format!(
                "Role {} may not perform {}",
                self.role, action
            )))
        }
    }
}

impl TryFrom<Claims> for CurrentUser {
    type Error = String;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let id = claims
            .sub
            .parse::<i64>()
            .map_err(|_| format!("Invalid subject: {}", claims.sub))?;
        let role = Role::from_str(&claims.role)?;
        Ok(Self {
            id,
            email: claims.email,
            role,
        })
    }
}

/// JWT Auth Extractor
///
/// Use this extractor in protected handlers to automatically validate the
/// bearer token and extract [`CurrentUser`].
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        // Check if already extracted earlier in the request
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let auth_header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = match auth_header {
            Some(header) => JwtService::extract_from_header(header)
                .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?,
            None => {
                tracing::warn!(uri = %parts.uri, "Missing authorization header");
                return Err(AppError::unauthorized());
            }
        };

        let jwt_service = state.get_jwt_service();
        match jwt_service.validate_token(token) {
            Ok(claims) => {
                let user = CurrentUser::try_from(claims)
                    .map_err(|e| AppError::invalid_token(format!("Malformed JWT claims: {}", e)))?;

                // Store in extensions for potential reuse
                parts.extensions.insert(user.clone());

                Ok(user)
            }
            Err(e) => {
                tracing::warn!(uri = %parts.uri, error = %e, "Token validation failed");
                match e {
                    JwtError::ExpiredToken => Err(AppError::token_expired()),
                    _ => Err(AppError::invalid_token("Invalid token")),
                }
            }
        }
    }
}
