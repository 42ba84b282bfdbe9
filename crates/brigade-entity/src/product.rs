//! Product (stock item) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unit of measure for a stocked product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "unit_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// Kilograms.
    Kg,
    /// Litres.
    Litre,
    /// Individual pieces.
    Piece,
    /// Bottles.
    Bottle,
    /// Packets.
    Packet,
}

impl UnitType {
    /// Return the unit as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Litre => "litre",
            Self::Piece => "piece",
            Self::Bottle => "bottle",
            Self::Packet => "packet",
        }
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UnitType {
    type Err = brigade_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" => Ok(Self::Kg),
            "litre" => Ok(Self::Litre),
            "piece" => Ok(Self::Piece),
            "bottle" => Ok(Self::Bottle),
            "packet" => Ok(Self::Packet),
            _ => Err(brigade_core::AppError::validation(format!(
                "Invalid unit type: '{s}'. Expected one of: kg, litre, piece, bottle, packet"
            ))),
        }
    }
}

/// A stocked product in the restaurant inventory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Unique product identifier.
    pub id: Uuid,
    /// Product name.
    pub name: String,
    /// Unit of measure.
    pub unit_type: UnitType,
    /// Cost per unit in the restaurant's default currency.
    pub cost_per_unit: f64,
    /// Current stock level, in units.
    pub current_volume: f64,
    /// Stock level at which a reorder is suggested.
    pub reorder_level: f64,
    /// Suppliers this product can be sourced from.
    pub supplier_ids: Vec<Uuid>,
    /// Product image URL (optional).
    pub image_url: Option<String>,
    /// The user who created this product.
    pub created_by: Uuid,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the stock level has fallen to or below the reorder level.
    pub fn is_low_stock(&self) -> bool {
        self.current_volume <= self.reorder_level
    }
}

/// Data required to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Product name.
    pub name: String,
    /// Unit of measure.
    pub unit_type: UnitType,
    /// Cost per unit.
    pub cost_per_unit: f64,
    /// Initial stock level.
    pub current_volume: f64,
    /// Reorder threshold.
    pub reorder_level: f64,
    /// Supplier references.
    pub supplier_ids: Vec<Uuid>,
    /// Product image URL (optional).
    pub image_url: Option<String>,
    /// The creating user's ID.
    pub created_by: Uuid,
}

/// Partial update of an existing product. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProduct {
    /// New name.
    pub name: Option<String>,
    /// New unit of measure.
    pub unit_type: Option<UnitType>,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock() {
        let mut product = Product {
            id: Uuid::new_v4(),
            name: "Olive oil".to_string(),
            unit_type: UnitType::Litre,
            cost_per_unit: 12.5,
            current_volume: 4.0,
            reorder_level: 5.0,
            supplier_ids: Vec::new(),
            image_url: None,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(product.is_low_stock());

        product.current_volume = 10.0;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_unit_type_parse() {
        assert_eq!("kg".parse::<UnitType>().unwrap(), UnitType::Kg);
        assert!("gallon".parse::<UnitType>().is_err());
    }
}
