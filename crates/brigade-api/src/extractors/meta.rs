//! `ClientMeta` extractor — requester network metadata for audit
//! enrichment on endpoints that run before authentication (login,
//! refresh).

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use std::convert::Infallible;

use brigade_service::context::RequestMeta;

/// Requester IP address and User-Agent.
#[derive(Debug, Clone)]
pub struct ClientMeta(pub RequestMeta);

/// Builds request metadata from header values.
///
/// The IP is taken from `X-Forwarded-For` (first hop) when present, as
/// set by the reverse proxy in front of the server.
pub fn client_meta_from_parts(parts: &Parts) -> RequestMeta {
    let ip_address = parts
        .headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string());

    let user_agent = parts
        .headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    RequestMeta {
        ip_address,
        user_agent,
    }
}

impl<S> FromRequestParts<S> for ClientMeta
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ClientMeta(client_meta_from_parts(parts)))
    }
}
