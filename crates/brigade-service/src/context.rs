//! Request context carrying the authenticated user and request metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brigade_entity::user::UserRole;

/// Network metadata about the requester, used to enrich audit entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestMeta {
    /// IP address of the request origin.
    pub ip_address: Option<String>,
    /// User-Agent header value.
    pub user_agent: Option<String>,
}

/// Context for the current authenticated request.
///
/// Built by the API layer's extractor and passed into service methods so
/// that every operation knows *who* is acting. The role is the **live**
/// role, re-fetched from the credential store during extraction — not the
/// role embedded in the token — so role edits take effect on the very next
/// request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The authenticated user's email.
    pub email: String,
    /// The user's live role.
    pub role: UserRole,
    /// Requester network metadata.
    pub meta: RequestMeta,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, email: String, role: UserRole, meta: RequestMeta) -> Self {
        Self {
            user_id,
            email,
            role,
            meta,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }
}
