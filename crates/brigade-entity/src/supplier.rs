//! Supplier entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A supplier the restaurant sources products from.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Supplier {
    /// Unique supplier identifier.
    pub id: Uuid,
    /// Supplier name.
    pub name: String,
    /// Contact phone number (optional).
    pub contact_phone: Option<String>,
    /// Contact email, stored lowercase (optional).
    pub contact_email: Option<String>,
    /// Postal address (optional).
    pub address: Option<String>,
    /// Free-form notes (optional).
    pub notes: Option<String>,
    /// The user who created this supplier.
    pub created_by: Uuid,
    /// When the supplier was created.
    pub created_at: DateTime<Utc>,
    /// When the supplier was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSupplier {
    /// Supplier name.
    pub name: String,
    /// Contact phone number (optional).
    pub contact_phone: Option<String>,
    /// Contact email (optional).
    pub contact_email: Option<String>,
    /// Postal address (optional).
    pub address: Option<String>,
    /// Free-form notes (optional).
    pub notes: Option<String>,
    /// The creating user's ID.
    pub created_by: Uuid,
}

/// Partial update of an existing supplier. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSupplier {
    /// New name.
    pub name: Option<String>,
    /// New contact phone.
    pub contact_phone: Option<String>,
    /// New contact email.
    pub contact_email: Option<String>,
    /// New address.
    pub address: Option<String>,
    /// New notes.
    pub notes: Option<String>,
}
