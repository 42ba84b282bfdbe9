//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use brigade_core::config::AuthConfig;
use brigade_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates JWT tokens against the configured key for each token class.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC key for verifying access tokens.
    access_key: DecodingKey,
    /// HMAC key for verifying refresh tokens.
    refresh_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            access_key: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks signature validity, expiration, and that the token type is
    /// Access. Liveness of the account behind the token is the caller's
    /// responsibility.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token, &self.access_key)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::unauthenticated(
                "Invalid token type: expected access token",
            ));
        }

        Ok(claims)
    }

    /// Decodes and validates a refresh token string against the refresh
    /// secret.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token, &self.refresh_key)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::unauthenticated(
                "Invalid token type: expected refresh token",
            ));
        }

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str, key: &DecodingKey) -> Result<Claims, AppError> {
        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthenticated("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthenticated("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthenticated("Invalid token signature")
                }
                _ => AppError::unauthenticated(format!("Token validation failed: {e}")),
            }
        })?;

        Ok(token_data.claims)
    }
}
