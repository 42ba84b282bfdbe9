//! Restaurant profile operations.

use std::sync::Arc;

use tracing::info;

use brigade_core::error::AppError;
use brigade_database::repositories::restaurant::RestaurantRepository;
use brigade_entity::audit::AuditAction;
use brigade_entity::restaurant::{RestaurantProfile, UpdateRestaurantProfile};

use crate::audit::AuditRecorder;
use crate::context::RequestContext;

/// Handles the singleton restaurant profile.
#[derive(Debug, Clone)]
pub struct RestaurantService {
    /// Restaurant repository.
    restaurant_repo: Arc<RestaurantRepository>,
    /// Audit recorder.
    audit: AuditRecorder,
}

impl RestaurantService {
    /// Creates a new restaurant service.
    pub fn new(restaurant_repo: Arc<RestaurantRepository>, audit: AuditRecorder) -> Self {
        Self {
            restaurant_repo,
            audit,
        }
    }

    /// Fetches the profile, creating it with defaults if absent.
    pub async fn get(&self) -> Result<RestaurantProfile, AppError> {
        self.restaurant_repo.get_or_create().await
    }

    /// Updates the profile.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        data: UpdateRestaurantProfile,
    ) -> Result<RestaurantProfile, AppError> {
        let before = self.restaurant_repo.get_or_create().await?;
        let after = self.restaurant_repo.update(&data).await?;

        self.audit.record(
            "RestaurantProfile",
            after.id,
            ctx.user_id,
            AuditAction::Update,
            serde_json::to_value(&before).ok(),
            serde_json::to_value(&after).ok(),
            &ctx.meta,
        );

        info!(actor = %ctx.user_id, "Restaurant profile updated");

        Ok(after)
    }
}
