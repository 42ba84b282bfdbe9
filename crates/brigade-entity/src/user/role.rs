//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the back office.
///
/// The set is closed: authorization checks are plain membership tests and
/// no role implies another. Adding a role is a deliberate code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full administrator — manages accounts, catalog, and the profile.
    Admin,
    /// Kitchen lead.
    Chef,
    /// Front-of-house cashier.
    Cashier,
    /// Regular staff member.
    Member,
}

impl UserRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Chef => "chef",
            Self::Cashier => "cashier",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = brigade_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "chef" => Ok(Self::Chef),
            "cashier" => Ok(Self::Cashier),
            "member" => Ok(Self::Member),
            _ => Err(brigade_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, chef, cashier, member"
            ))),
        }
    }
}
