//! Restaurant profile repository implementation.

use sqlx::PgPool;

use brigade_core::error::{AppError, ErrorKind};
use brigade_core::result::AppResult;
use brigade_entity::restaurant::{RestaurantProfile, UpdateRestaurantProfile};

/// Repository for the singleton restaurant profile row.
#[derive(Debug, Clone)]
pub struct RestaurantRepository {
    pool: PgPool,
}

impl RestaurantRepository {
    /// Create a new restaurant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch the profile, creating it with defaults if none exists yet.
    pub async fn get_or_create(&self) -> AppResult<RestaurantProfile> {
        let existing =
            sqlx::query_as::<_, RestaurantProfile>("SELECT * FROM restaurant_profile LIMIT 1")
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to fetch profile", e)
                })?;

        if let Some(profile) = existing {
            return Ok(profile);
        }

        sqlx::query_as::<_, RestaurantProfile>(
            "INSERT INTO restaurant_profile (name, address, default_currency) \
             VALUES ('My Restaurant', '123 Main Street, City, Country', 'USD') \
             RETURNING *",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create profile", e))
    }

    /// Apply a partial update to the profile.
    pub async fn update(&self, data: &UpdateRestaurantProfile) -> AppResult<RestaurantProfile> {
        // Ensure the singleton row exists before updating it.
        let current = self.get_or_create().await?;

        sqlx::query_as::<_, RestaurantProfile>(
            "UPDATE restaurant_profile SET name = COALESCE($2, name), \
                                           address = COALESCE($3, address), \
                                           logo_url = COALESCE($4, logo_url), \
                                           default_currency = COALESCE($5, default_currency), \
                                           contact_phone = COALESCE($6, contact_phone), \
                                           contact_email = COALESCE(LOWER($7), contact_email), \
                                           updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(current.id)
        .bind(&data.name)
        .bind(&data.address)
        .bind(&data.logo_url)
        .bind(&data.default_currency)
        .bind(&data.contact_phone)
        .bind(&data.contact_email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))
    }
}
