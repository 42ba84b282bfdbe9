//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Kind of action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "audit_action", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    /// A record was created.
    Create,
    /// A record was updated.
    Update,
    /// A record was deleted.
    Delete,
    /// A user logged in.
    Login,
    /// A user logged out.
    Logout,
}

impl AuditAction {
    /// Return the action as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Login => "login",
            Self::Logout => "logout",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = brigade_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "update" => Ok(Self::Update),
            "delete" => Ok(Self::Delete),
            "login" => Ok(Self::Login),
            "logout" => Ok(Self::Logout),
            _ => Err(brigade_core::AppError::validation(format!(
                "Invalid audit action: '{s}'. Expected one of: create, update, delete, login, logout"
            ))),
        }
    }
}

/// An immutable audit trail entry recording who did what to which record.
///
/// Entries reference the actor and subject by id only; the subject may be
/// deleted later while the entry persists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditEntry {
    /// Unique audit entry identifier.
    pub id: Uuid,
    /// The type of record acted on (e.g. `"User"`, `"Product"`).
    pub record_type: String,
    /// The id of the record acted on.
    pub record_id: Uuid,
    /// The user who performed the action.
    pub user_id: Uuid,
    /// The action performed.
    pub action: AuditAction,
    /// Snapshot of the record before the action (absent on create).
    pub before: Option<serde_json::Value>,
    /// Snapshot of the record after the action (absent on delete).
    pub after: Option<serde_json::Value>,
    /// IP address of the requester.
    pub ip_address: Option<String>,
    /// User-Agent of the requester.
    pub user_agent: Option<String>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new audit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAuditEntry {
    /// The type of record acted on.
    pub record_type: String,
    /// The id of the record acted on.
    pub record_id: Uuid,
    /// The acting user's id.
    pub user_id: Uuid,
    /// The action performed.
    pub action: AuditAction,
    /// Before-state snapshot.
    pub before: Option<serde_json::Value>,
    /// After-state snapshot.
    pub after: Option<serde_json::Value>,
    /// Requester IP address.
    pub ip_address: Option<String>,
    /// Requester User-Agent.
    pub user_agent: Option<String>,
}
