//! Administrative user management handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use brigade_auth::policy::require_role;
use brigade_entity::user::UserRole;

use crate::dto::request::{ChangeActiveRequest, ChangeRoleRequest};
use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// PUT /api/users/{id}/role (admin only)
pub async fn change_role(
    State(state): State<AppState>,
    auth: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;
    let role = req.role.parse::<UserRole>()?;

    let user = state
        .user_service
        .change_role(auth.context(), id, role)
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// PUT /api/users/{id}/active (admin only)
///
/// Deactivation is the revocation mechanism: the target's outstanding
/// tokens stay cryptographically valid, but the per-request liveness
/// check refuses them from the next request onwards.
pub async fn change_active(
    State(state): State<AppState>,
    auth: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeActiveRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;

    let user = state
        .user_service
        .set_active(auth.context(), id, req.is_active)
        .await?;

    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}
