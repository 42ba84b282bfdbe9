//! Auth handlers — login, refresh, register, logout, me, password change.

use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{DateTime, Utc};

use brigade_auth::policy::require_role;
use brigade_core::error::AppError;
use brigade_entity::user::UserRole;
use brigade_service::auth::RegisterData;

use crate::dto::request::{ChangePasswordRequest, LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::dto::response::{
    ApiResponse, LoginResponse, MessageResponse, RefreshResponse, UserResponse,
};
use crate::dto::validate_payload;
use crate::extractors::{ClientMeta, CurrentUser};
use crate::state::AppState;

/// Name of the refresh token cookie.
const REFRESH_COOKIE: &str = "refresh_token";
/// The refresh cookie is scoped to the auth routes; no other endpoint
/// ever sees the long-lived credential.
const REFRESH_COOKIE_PATH: &str = "/api/auth";

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ClientMeta(meta): ClientMeta,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    validate_payload(&req)?;

    let rate_key = meta.ip_address.clone().unwrap_or_else(|| "unknown".to_string());
    if !state.login_limiter.check(&rate_key).await {
        return Err(AppError::rate_limited(
            "Too many login attempts, please try again later",
        )
        .into());
    }

    let result = state.auth_service.login(&req.email, &req.password, &meta).await?;

    let jar = jar.add(refresh_cookie(
        &state,
        result.tokens.refresh_token.clone(),
        result.tokens.refresh_expires_at,
    ));

    Ok((
        jar,
        Json(ApiResponse::ok(LoginResponse {
            message: "Login successful".to_string(),
            user: UserResponse::from(&result.user),
            access_token: result.tokens.access_token,
            access_expires_at: result.tokens.access_expires_at,
        })),
    ))
}

/// POST /api/auth/refresh
///
/// Reads the refresh token from its HTTP-only cookie and mints a new
/// access token carrying the account's current role.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<ApiResponse<RefreshResponse>>, ApiError> {
    let refresh_token = jar
        .get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| AppError::unauthenticated("Refresh token is required"))?;

    let (access_token, access_expires_at) = state.auth_service.refresh(&refresh_token).await?;

    Ok(Json(ApiResponse::ok(RefreshResponse {
        access_token,
        access_expires_at,
    })))
}

/// POST /api/auth/register (admin only)
pub async fn register(
    State(state): State<AppState>,
    auth: CurrentUser,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;
    validate_payload(&req)?;

    let role = match req.role.as_deref() {
        Some(role) => role.parse::<UserRole>()?,
        None => UserRole::Member,
    };

    let result = state
        .auth_service
        .register(
            auth.context(),
            RegisterData {
                name: req.name,
                email: req.email,
                password: req.password,
                role,
                phone: req.phone,
            },
        )
        .await?;

    // The new user's refresh token is not set as a cookie here: that
    // would overwrite the registering admin's own session cookie.
    Ok(Json(ApiResponse::ok(LoginResponse {
        message: "User registered successfully".to_string(),
        user: UserResponse::from(&result.user),
        access_token: result.tokens.access_token,
        access_expires_at: result.tokens.access_expires_at,
    })))
}

/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: CurrentUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    state.auth_service.logout(auth.context()).await;

    let jar = jar.remove(removal_cookie());

    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse {
            message: "Logout successful".to_string(),
        })),
    ))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: CurrentUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.user_service.get_profile(auth.context()).await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// PUT /api/auth/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: CurrentUser,
    Json(req): Json<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    validate_payload(&req)?;

    state
        .user_service
        .change_password(auth.context(), &req.current_password, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Password changed successfully".to_string(),
    })))
}

/// Builds the HTTP-only, same-site-strict refresh cookie.
fn refresh_cookie(
    state: &AppState,
    token: String,
    expires_at: DateTime<Utc>,
) -> Cookie<'static> {
    let remaining = (expires_at - Utc::now()).num_seconds().max(0);

    let mut cookie = Cookie::new(REFRESH_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_secure(state.config.auth.secure_cookies);
    cookie.set_path(REFRESH_COOKIE_PATH);
    cookie.set_max_age(time::Duration::seconds(remaining));
    cookie
}

/// Builds the cookie used to clear the refresh token on logout.
fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(REFRESH_COOKIE, "");
    cookie.set_path(REFRESH_COOKIE_PATH);
    cookie
}
