//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A staff account in the Brigade back office.
///
/// The password hash is excluded from every serialized representation;
/// only the password-verification path reads it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Unique email address, stored lowercase.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Avatar image URL (optional).
    pub avatar_url: Option<String>,
    /// Whether the account may authenticate. Deactivation is the deletion
    /// surrogate; user rows are never hard-deleted.
    pub is_active: bool,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full name.
    pub name: String,
    /// Email address (normalized to lowercase on write).
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Phone number (optional).
    pub phone: Option<String>,
}
