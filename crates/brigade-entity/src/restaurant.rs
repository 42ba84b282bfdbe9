//! Restaurant profile entity — a singleton row describing the venue.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The restaurant's own profile. Exactly one row exists; reads create it
/// with defaults if missing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RestaurantProfile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// Restaurant name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Logo image URL (optional).
    pub logo_url: Option<String>,
    /// ISO currency code used for prices.
    pub default_currency: String,
    /// Contact phone number (optional).
    pub contact_phone: Option<String>,
    /// Contact email (optional).
    pub contact_email: Option<String>,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Partial update of the restaurant profile. `None` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRestaurantProfile {
    /// New name.
    pub name: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New logo URL.
    pub logo_url: Option<String>,
    /// New default currency code.
    pub default_currency: Option<String>,
    /// New contact phone.
    pub contact_phone: Option<String>,
    /// New contact email.
    pub contact_email: Option<String>,
}
