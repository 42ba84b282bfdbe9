//! `CurrentUser` extractor — pulls the JWT from the Authorization header,
//! validates it, re-resolves the account, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use brigade_core::error::AppError;
use brigade_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

use super::meta::client_meta_from_parts;

/// Extracted authenticated user context available in handlers.
///
/// Tokens are stateless, so the only revocation mechanism is the liveness
/// check performed here: the account is re-fetched on **every** request
/// and refused if it no longer exists or has been deactivated. The role
/// attached to the context is the freshly fetched one, so a role edit
/// takes effect immediately even mid-token-lifetime.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub RequestContext);

impl CurrentUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for CurrentUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("No token provided"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthenticated("Invalid Authorization header format"))?;

        // Decode and validate the JWT. Failure is terminal; the client
        // must refresh out-of-band.
        let claims = state.jwt_decoder.decode_access_token(token)?;

        // Liveness check: the identity must still exist and be active.
        let user = state
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| AppError::unauthenticated("User not found or inactive"))?;

        let meta = client_meta_from_parts(parts);

        Ok(CurrentUser(RequestContext::new(
            user.id, user.email, user.role, meta,
        )))
    }
}
