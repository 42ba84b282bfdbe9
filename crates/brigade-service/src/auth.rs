//! Authentication flows — login, token refresh, registration, logout.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{info, warn};

use brigade_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use brigade_auth::password::{PasswordHasher, PasswordPolicy};
use brigade_core::error::AppError;
use brigade_database::repositories::user::UserRepository;
use brigade_entity::audit::AuditAction;
use brigade_entity::user::{CreateUser, User, UserRole};

use crate::audit::AuditRecorder;
use crate::context::{RequestContext, RequestMeta};

/// Result of a successful login or registration.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// Generated token pair. The refresh token is delivered to the client
    /// only as an HTTP-only cookie, never in a response body.
    pub tokens: TokenPair,
}

/// Data for registering a new user.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterData {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Plaintext password (hashed before storage).
    pub password: String,
    /// Assigned role.
    pub role: UserRole,
    /// Phone number (optional).
    pub phone: Option<String>,
}

/// Orchestrates the credential store, password hasher, and token service.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy for new credentials.
    policy: PasswordPolicy,
    /// JWT encoder.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder.
    jwt_decoder: Arc<JwtDecoder>,
    /// Audit recorder.
    audit: AuditRecorder,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        policy: PasswordPolicy,
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        audit: AuditRecorder,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            policy,
            jwt_encoder,
            jwt_decoder,
            audit,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Look up the identity by email
    /// 2. Check the active flag
    /// 3. Verify the password
    /// 4. Issue the access + refresh token pair
    /// 5. Record a login audit entry (fire-and-forget)
    ///
    /// Unknown email and wrong password produce the identical error so the
    /// response does not reveal which one failed.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        meta: &RequestMeta,
    ) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthenticated("Invalid email or password"))?;

        if !user.is_active {
            warn!(user_id = %user.id, "Login attempt on inactive account");
            return Err(AppError::forbidden("Account is inactive"));
        }

        let password_valid = self.hasher.verify(password, &user.password_hash)?;
        if !password_valid {
            warn!(user_id = %user.id, "Failed login attempt");
            return Err(AppError::unauthenticated("Invalid email or password"));
        }

        let tokens = self.jwt_encoder.issue_token_pair(&user)?;

        self.audit.record(
            "User",
            user.id,
            user.id,
            AuditAction::Login,
            None,
            Some(json!({ "email": user.email, "role": user.role })),
            meta,
        );

        info!(user_id = %user.id, "Login successful");

        Ok(LoginResult { user, tokens })
    }

    /// Mints a new access token from a valid refresh token.
    ///
    /// The identity is re-fetched so the new token carries the account's
    /// current role, and a deactivated or deleted account is refused even
    /// while its refresh token is unexpired.
    pub async fn refresh(&self, refresh_token: &str) -> Result<(String, DateTime<Utc>), AppError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .filter(|u| u.is_active)
            .ok_or_else(|| AppError::unauthenticated("User not found or inactive"))?;

        self.jwt_encoder.issue_access_token(&user)
    }

    /// Registers a new user on behalf of an administrator.
    ///
    /// The caller's admin role is enforced at the API boundary; this
    /// method validates the password, stores the hashed credential, audits
    /// the creation, and issues tokens for the new account.
    pub async fn register(
        &self,
        ctx: &RequestContext,
        data: RegisterData,
    ) -> Result<LoginResult, AppError> {
        self.policy.validate(&data.password)?;

        let password_hash = self.hasher.hash(&data.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: data.name,
                email: data.email,
                password_hash,
                role: data.role,
                phone: data.phone,
            })
            .await?;

        self.audit.record(
            "User",
            user.id,
            ctx.user_id,
            AuditAction::Create,
            None,
            Some(json!({
                "name": user.name,
                "email": user.email,
                "role": user.role,
            })),
            &ctx.meta,
        );

        info!(user_id = %user.id, created_by = %ctx.user_id, "User registered");

        let tokens = self.jwt_encoder.issue_token_pair(&user)?;

        Ok(LoginResult { user, tokens })
    }

    /// Records the logout event. Tokens are stateless, so logout is an
    /// audit-trail and cookie-clearing concern only.
    pub async fn logout(&self, ctx: &RequestContext) {
        self.audit.record(
            "User",
            ctx.user_id,
            ctx.user_id,
            AuditAction::Logout,
            None,
            None,
            &ctx.meta,
        );

        info!(user_id = %ctx.user_id, "Logout");
    }
}
