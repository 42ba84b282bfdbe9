//! User self-service and administrative account management.

use std::sync::Arc;

use serde_json::json;
use tracing::info;
use uuid::Uuid;

use brigade_auth::password::{PasswordHasher, PasswordPolicy};
use brigade_core::error::AppError;
use brigade_database::repositories::user::UserRepository;
use brigade_entity::audit::AuditAction;
use brigade_entity::user::{User, UserRole};

use crate::audit::{AuditRecorder, password_change_snapshot};
use crate::context::RequestContext;

/// Handles user profile operations and account administration.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    policy: PasswordPolicy,
    /// Audit recorder.
    audit: AuditRecorder,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        policy: PasswordPolicy,
        audit: AuditRecorder,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            policy,
            audit,
        }
    }

    /// Gets the current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Changes the current user's password.
    ///
    /// The audit snapshots never contain hash material — both sides are
    /// recorded as a fixed placeholder.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let user = self.get_profile(ctx).await?;

        let valid = self.hasher.verify(current_password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthenticated("Current password is incorrect"));
        }

        self.policy.validate(new_password)?;
        self.policy.validate_not_same(current_password, new_password)?;

        let new_hash = self.hasher.hash(new_password)?;
        self.user_repo.update_password(ctx.user_id, &new_hash).await?;

        self.audit.record(
            "User",
            user.id,
            ctx.user_id,
            AuditAction::Update,
            Some(password_change_snapshot()),
            Some(password_change_snapshot()),
            &ctx.meta,
        );

        info!(user_id = %ctx.user_id, "Password changed");

        Ok(())
    }

    /// Changes another user's role (administrative operation).
    pub async fn change_role(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        role: UserRole,
    ) -> Result<User, AppError> {
        let before = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let after = self.user_repo.update_role(user_id, role).await?;

        self.audit.record(
            "User",
            user_id,
            ctx.user_id,
            AuditAction::Update,
            Some(json!({ "role": before.role })),
            Some(json!({ "role": after.role })),
            &ctx.meta,
        );

        info!(user_id = %user_id, actor = %ctx.user_id, role = %role, "Role changed");

        Ok(after)
    }

    /// Activates or deactivates an account (administrative operation).
    ///
    /// Deactivation takes effect on the target's very next request: the
    /// per-request liveness check refuses the account even though its
    /// tokens remain cryptographically valid until expiry.
    pub async fn set_active(
        &self,
        ctx: &RequestContext,
        user_id: Uuid,
        is_active: bool,
    ) -> Result<User, AppError> {
        let before = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let after = self.user_repo.set_active(user_id, is_active).await?;

        self.audit.record(
            "User",
            user_id,
            ctx.user_id,
            AuditAction::Update,
            Some(json!({ "is_active": before.is_active })),
            Some(json!({ "is_active": after.is_active })),
            &ctx.meta,
        );

        info!(user_id = %user_id, actor = %ctx.user_id, is_active, "Active flag changed");

        Ok(after)
    }
}
