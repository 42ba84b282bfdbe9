//! Role-based authorization policy.
//!
//! The policy is a plain membership test against the closed role set.
//! There is no hierarchy between roles: an endpoint that permits `Chef`
//! does not implicitly permit `Admin` — every allowed role is listed
//! explicitly at the call site.

use brigade_core::error::AppError;
use brigade_entity::user::UserRole;

/// Checks that `role` is one of the roles permitted for an operation.
///
/// Pure predicate with no side effects, evaluated after authentication.
pub fn require_role(role: UserRole, allowed: &[UserRole]) -> Result<(), AppError> {
    if allowed.contains(&role) {
        return Ok(());
    }
    Err(AppError::forbidden("Forbidden: insufficient permissions"))
}
