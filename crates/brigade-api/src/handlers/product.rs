//! Product catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use brigade_auth::policy::require_role;
use brigade_entity::product::{CreateProduct, Product, UnitType, UpdateProduct};
use brigade_entity::user::UserRole;

use crate::dto::request::{CreateProductRequest, ProductListQuery, UpdateProductRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::dto::validate_payload;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    _auth: CurrentUser,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<ApiResponse<Vec<Product>>>, ApiError> {
    let products = state
        .product_service
        .list(query.search.as_deref(), query.low_stock)
        .await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    _auth: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    let product = state.product_service.get(id).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// POST /api/products (admin only)
pub async fn create_product(
    State(state): State<AppState>,
    auth: CurrentUser,
    Json(req): Json<CreateProductRequest>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;
    validate_payload(&req)?;

    let product = state
        .product_service
        .create(
            auth.context(),
            CreateProduct {
                name: req.name,
                unit_type: req.unit_type.parse()?,
                cost_per_unit: req.cost_per_unit,
                current_volume: req.current_volume.unwrap_or(0.0),
                reorder_level: req.reorder_level.unwrap_or(0.0),
                supplier_ids: req.supplier_ids.unwrap_or_default(),
                image_url: req.image_url,
                created_by: auth.user_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(product)))
}

/// PUT /api/products/{id} (admin only)
pub async fn update_product(
    State(state): State<AppState>,
    auth: CurrentUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ApiResponse<Product>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;

    let unit_type = req
        .unit_type
        .as_deref()
        .map(str::parse::<UnitType>)
        .transpose()?;

    let product = state
        .product_service
        .update(
            auth.context(),
            id,
            UpdateProduct {
                name: req.name,
                unit_type,
                cost_per_unit: req.cost_per_unit,
                current_volume: req.current_volume,
                reorder_level: req.reorder_level,
                supplier_ids: req.supplier_ids,
                image_url: req.image_url,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(product)))
}

/// DELETE /api/products/{id} (admin only)
pub async fn delete_product(
    State(state): State<AppState>,
    auth: CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;

    state.product_service.delete(auth.context(), id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Product deleted successfully".to_string(),
    })))
}
