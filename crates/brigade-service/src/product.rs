//! Product catalog operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use brigade_core::error::AppError;
use brigade_database::repositories::product::ProductRepository;
use brigade_entity::audit::AuditAction;
use brigade_entity::product::{CreateProduct, Product, UpdateProduct};

use crate::audit::AuditRecorder;
use crate::context::RequestContext;

/// Handles product CRUD with audit snapshots.
#[derive(Debug, Clone)]
pub struct ProductService {
    /// Product repository.
    product_repo: Arc<ProductRepository>,
    /// Audit recorder.
    audit: AuditRecorder,
}

impl ProductService {
    /// Creates a new product service.
    pub fn new(product_repo: Arc<ProductRepository>, audit: AuditRecorder) -> Self {
        Self {
            product_repo,
            audit,
        }
    }

    /// Lists products, optionally filtered by name search and low stock.
    pub async fn list(
        &self,
        search: Option<&str>,
        low_stock: bool,
    ) -> Result<Vec<Product>, AppError> {
        self.product_repo.list(search, low_stock).await
    }

    /// Fetches a single product.
    pub async fn get(&self, id: Uuid) -> Result<Product, AppError> {
        self.product_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))
    }

    /// Creates a product. The audit entry records the after-state only.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut data: CreateProduct,
    ) -> Result<Product, AppError> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Product name is required"));
        }
        if data.cost_per_unit < 0.0 {
            return Err(AppError::validation("Cost per unit must be positive"));
        }
        data.created_by = ctx.user_id;

        let product = self.product_repo.create(&data).await?;

        self.audit.record(
            "Product",
            product.id,
            ctx.user_id,
            AuditAction::Create,
            None,
            serde_json::to_value(&product).ok(),
            &ctx.meta,
        );

        info!(product_id = %product.id, actor = %ctx.user_id, "Product created");

        Ok(product)
    }

    /// Updates a product. The audit entry records both snapshots.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateProduct,
    ) -> Result<Product, AppError> {
        let before = self.get(id).await?;
        let after = self.product_repo.update(id, &data).await?;

        self.audit.record(
            "Product",
            id,
            ctx.user_id,
            AuditAction::Update,
            serde_json::to_value(&before).ok(),
            serde_json::to_value(&after).ok(),
            &ctx.meta,
        );

        info!(product_id = %id, actor = %ctx.user_id, "Product updated");

        Ok(after)
    }

    /// Deletes a product. The audit entry records the before-state only.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let before = self.get(id).await?;

        let deleted = self.product_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found("Product not found"));
        }

        self.audit.record(
            "Product",
            id,
            ctx.user_id,
            AuditAction::Delete,
            serde_json::to_value(&before).ok(),
            None,
            &ctx.meta,
        );

        info!(product_id = %id, actor = %ctx.user_id, "Product deleted");

        Ok(())
    }
}
