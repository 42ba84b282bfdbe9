//! Audit trail handlers.

use axum::Json;
use axum::extract::{Query, State};

use brigade_auth::policy::require_role;
use brigade_core::pagination::{PageRequest, PageResponse};
use brigade_entity::audit::{AuditAction, AuditEntry};
use brigade_entity::user::UserRole;

use crate::dto::request::AuditSearchQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/audit (admin only)
pub async fn search_audit(
    State(state): State<AppState>,
    auth: CurrentUser,
    Query(query): Query<AuditSearchQuery>,
) -> Result<Json<ApiResponse<PageResponse<AuditEntry>>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;

    let action = query
        .action
        .as_deref()
        .map(str::parse::<AuditAction>)
        .transpose()?;
    let page = PageRequest::new(query.page.unwrap_or(1), query.page_size.unwrap_or(25));

    let result = state
        .audit_repo
        .search(
            query.record_type.as_deref(),
            query.record_id,
            query.user_id,
            action,
            &page,
        )
        .await?;

    Ok(Json(ApiResponse::ok(result)))
}
