//! Supplier directory handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use brigade_auth::policy::require_role;
use brigade_entity::supplier::{CreateSupplier, Supplier, UpdateSupplier};
use brigade_entity::user::UserRole;

use crate::dto::request::{CreateSupplierRequest, SupplierListQuery, UpdateSupplierRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/suppliers
pub async fn list_suppliers(
    State(state): State<AppState>,
    _auth: CurrentUser,
    Query(query): Query<SupplierListQuery>,
) -> Result<Json<ApiResponse<Vec<Supplier>>>, ApiError> {
    let suppliers = state.supplier_service.list(query.search.as_deref()).await?;
    Ok(Json(ApiResponse::ok(suppliers)))
}

/// GET /api/suppliers/{id}
pub async fn get_supplier(
    State(state): State<AppState>,
    _auth: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Supplier>>, ApiError> {
    let supplier = state.supplier_service.get(id).await?;
    Ok(Json(ApiResponse::ok(supplier)))
}

/// POST /api/suppliers (admin only)
pub async fn create_supplier(
    State(state): State<AppState>,
    auth: CurrentUser,
    Json(req): Json<CreateSupplierRequest>,
) -> Result<Json<ApiResponse<Supplier>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;
    validate_payload(&req)?;

    let supplier = state
        .supplier_service
        .create(
            auth.context(),
            CreateSupplier {
                name: req.name,
                contact_phone: req.contact_phone,
                contact_email: req.contact_email,
                address: req.address,
                notes: req.notes,
                created_by: auth.user_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(supplier)))
}

/// PUT /api/suppliers/{id} (admin only)
pub async fn update_supplier(
    State(state): State<AppState>,
    auth: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSupplierRequest>,
) -> Result<Json<ApiResponse<Supplier>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;

    let supplier = state
        .supplier_service
        .update(
            auth.context(),
            id,
            UpdateSupplier {
                name: req.name,
                contact_phone: req.contact_phone,
                contact_email: req.contact_email,
                address: req.address,
                notes: req.notes,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(supplier)))
}

/// DELETE /api/suppliers/{id} (admin only)
pub async fn delete_supplier(
    State(state): State<AppState>,
    auth: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;

    state.supplier_service.delete(auth.context(), id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Supplier deleted successfully".to_string(),
    })))
}
