//! Restaurant profile handlers.

use axum::Json;
use axum::extract::State;

use brigade_auth::policy::require_role;
use brigade_entity::restaurant::{RestaurantProfile, UpdateRestaurantProfile};
use brigade_entity::user::UserRole;

use crate::dto::request::UpdateRestaurantRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::CurrentUser;
use crate::state::AppState;

/// GET /api/restaurant
pub async fn get_profile(
    State(state): State<AppState>,
    _auth: CurrentUser,
) -> Result<Json<ApiResponse<RestaurantProfile>>, ApiError> {
    let profile = state.restaurant_service.get().await?;
    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /api/restaurant (admin only)
pub async fn update_profile(
    State(state): State<AppState>,
    auth: CurrentUser,
    Json(req): Json<UpdateRestaurantRequest>,
) -> Result<Json<ApiResponse<RestaurantProfile>>, ApiError> {
    require_role(auth.role, &[UserRole::Admin])?;

    let profile = state
        .restaurant_service
        .update(
            auth.context(),
            UpdateRestaurantProfile {
                name: req.name,
                address: req.address,
                logo_url: req.logo_url,
                default_currency: req.default_currency,
                contact_phone: req.contact_phone,
                contact_email: req.contact_email,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(profile)))
}
