//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Register request body (admin only).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Role name; defaults to `member` when omitted.
    pub role: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password: String,
}

/// Role change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    /// New role name.
    pub role: String,
}

/// Active flag change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeActiveRequest {
    /// Whether the account may authenticate.
    pub is_active: bool,
}

/// Product list query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    /// Case-insensitive name search.
    pub search: Option<String>,
    /// When true, only products at or below their reorder level.
    #[serde(default)]
    pub low_stock: bool,
}

/// Create product request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    /// Product name.
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    /// Unit of measure.
    pub unit_type: String,
    /// Cost per unit.
    #[validate(range(min = 0.0, message = "Cost per unit must be positive"))]
    pub cost_per_unit: f64,
    /// Initial stock level; defaults to 0.
    pub current_volume: Option<f64>,
    /// Reorder threshold; defaults to 0.
    pub reorder_level: Option<f64>,
    /// Supplier references.
    pub supplier_ids: Option<Vec<Uuid>>,
    /// Image URL.
    pub image_url: Option<String>,
}

/// Update product request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    /// New name.
    pub name: Option<String>,
    /// New unit of measure.
    pub unit_type: Option<String>,
    /// New cost per unit.
    pub cost_per_unit: Option<f64>,
    /// New stock level.
    pub current_volume: Option<f64>,
    /// New reorder threshold.
    pub reorder_level: Option<f64>,
    /// New supplier references.
    pub supplier_ids: Option<Vec<Uuid>>,
    /// New image URL.
    pub image_url: Option<String>,
}

/// Supplier list query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierListQuery {
    /// Case-insensitive name search.
    pub search: Option<String>,
}

/// Create supplier request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSupplierRequest {
    /// Supplier name.
    #[validate(length(min = 1, message = "Supplier name is required"))]
    pub name: String,
    /// Contact phone.
    pub contact_phone: Option<String>,
    /// Contact email.
    #[validate(email(message = "A valid contact email is required"))]
    pub contact_email: Option<String>,
    /// Address.
    pub address: Option<String>,
    /// Notes.
    pub notes: Option<String>,
}

/// Update supplier request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSupplierRequest {
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

/// Update restaurant profile request (admin).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRestaurantRequest {
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

/// Audit search query parameters (admin).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditSearchQuery {
    /// Filter by record type (e.g. `"User"`, `"Product"`).
    pub record_type: Option<String>,
    /// Filter by subject record id.
    pub record_id: Option<Uuid>,
    /// Filter by acting user id.
    pub user_id: Option<Uuid>,
    /// Filter by action kind.
    pub action: Option<String>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}
