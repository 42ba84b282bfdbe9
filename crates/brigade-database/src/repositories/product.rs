//! Product repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use brigade_core::error::{AppError, ErrorKind};
use brigade_core::result::AppResult;
use brigade_entity::product::{CreateProduct, Product, UpdateProduct};

/// Repository for product records.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a product by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product", e))
    }

    /// List products, newest first, optionally filtered by a
    /// case-insensitive name search and/or the low-stock condition.
    pub async fn list(&self, search: Option<&str>, low_stock: bool) -> AppResult<Vec<Product>> {
        let mut conditions = Vec::new();
        if search.is_some() {
            conditions.push("name ILIKE $1".to_string());
        }
        if low_stock {
            conditions.push("current_volume <= reorder_level".to_string());
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!("SELECT * FROM products {where_clause} ORDER BY created_at DESC");
        let mut query = sqlx::query_as::<_, Product>(&sql);

        if let Some(search) = search {
            query = query.bind(format!("%{search}%"));
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))
    }

    /// Create a new product.
    pub async fn create(&self, data: &CreateProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, unit_type, cost_per_unit, current_volume, \
                                   reorder_level, supplier_ids, image_url, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(data.unit_type)
        .bind(data.cost_per_unit)
        .bind(data.current_volume)
        .bind(data.reorder_level)
        .bind(&data.supplier_ids)
        .bind(&data.image_url)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create product", e))
    }

    /// Apply a partial update to an existing product.
    pub async fn update(&self, id: Uuid, data: &UpdateProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "UPDATE products SET name = COALESCE($2, name), \
                                 unit_type = COALESCE($3, unit_type), \
                                 cost_per_unit = COALESCE($4, cost_per_unit), \
                                 current_volume = COALESCE($5, current_volume), \
                                 reorder_level = COALESCE($6, reorder_level), \
                                 supplier_ids = COALESCE($7, supplier_ids), \
                                 image_url = COALESCE($8, image_url), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.unit_type)
        .bind(data.cost_per_unit)
        .bind(data.current_volume)
        .bind(data.reorder_level)
        .bind(&data.supplier_ids)
        .bind(&data.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))?
        .ok_or_else(|| AppError::not_found(format!("Product {id} not found")))
    }

    /// Delete a product by id. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete product", e))?;

        Ok(result.rows_affected() > 0)
    }
}
