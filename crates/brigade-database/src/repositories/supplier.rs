//! Supplier repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use brigade_core::error::{AppError, ErrorKind};
use brigade_core::result::AppResult;
use brigade_entity::supplier::{CreateSupplier, Supplier, UpdateSupplier};

/// Repository for supplier records.
#[derive(Debug, Clone)]
pub struct SupplierRepository {
    pool: PgPool,
}

impl SupplierRepository {
    /// Create a new supplier repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a supplier by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Supplier>> {
        sqlx::query_as::<_, Supplier>("SELECT * FROM suppliers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find supplier", e))
    }

    /// List suppliers, newest first, optionally filtered by a
    /// case-insensitive name search.
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Supplier>> {
        let query = match search {
            Some(search) => sqlx::query_as::<_, Supplier>(
                "SELECT * FROM suppliers WHERE name ILIKE $1 ORDER BY created_at DESC",
            )
            .bind(format!("%{search}%")),
            None => sqlx::query_as::<_, Supplier>("SELECT * FROM suppliers ORDER BY created_at DESC"),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list suppliers", e))
    }

    /// Create a new supplier. The contact email is lowercased on write.
    pub async fn create(&self, data: &CreateSupplier) -> AppResult<Supplier> {
        sqlx::query_as::<_, Supplier>(
            "INSERT INTO suppliers (name, contact_phone, contact_email, address, notes, created_by) \
             VALUES ($1, $2, LOWER($3), $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.contact_phone)
        .bind(&data.contact_email)
        .bind(&data.address)
        .bind(&data.notes)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create supplier", e))
    }

    /// Apply a partial update to an existing supplier.
    pub async fn update(&self, id: Uuid, data: &UpdateSupplier) -> AppResult<Supplier> {
        sqlx::query_as::<_, Supplier>(
            "UPDATE suppliers SET name = COALESCE($2, name), \
                                  contact_phone = COALESCE($3, contact_phone), \
                                  contact_email = COALESCE(LOWER($4), contact_email), \
                                  address = COALESCE($5, address), \
                                  notes = COALESCE($6, notes), \
                                  updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.contact_phone)
        .bind(&data.contact_email)
        .bind(&data.address)
        .bind(&data.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update supplier", e))?
        .ok_or_else(|| AppError::not_found(format!("Supplier {id} not found")))
    }

    /// Delete a supplier by id. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete supplier", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
