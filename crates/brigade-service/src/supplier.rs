//! Supplier directory operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use brigade_core::error::AppError;
use brigade_database::repositories::supplier::SupplierRepository;
use brigade_entity::audit::AuditAction;
use brigade_entity::supplier::{CreateSupplier, Supplier, UpdateSupplier};

use crate::audit::AuditRecorder;
use crate::context::RequestContext;

/// Handles supplier CRUD with audit snapshots.
#[derive(Debug, Clone)]
pub struct SupplierService {
    /// Supplier repository.
    supplier_repo: Arc<SupplierRepository>,
    /// Audit recorder.
    audit: AuditRecorder,
}

impl SupplierService {
    /// Creates a new supplier service.
    pub fn new(supplier_repo: Arc<SupplierRepository>, audit: AuditRecorder) -> Self {
        Self {
            supplier_repo,
            audit,
        }
    }

    /// Lists suppliers, optionally filtered by name search.
    pub async fn list(&self, search: Option<&str>) -> Result<Vec<Supplier>, AppError> {
        self.supplier_repo.list(search).await
    }

    /// Fetches a single supplier.
    pub async fn get(&self, id: Uuid) -> Result<Supplier, AppError> {
        self.supplier_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Supplier not found"))
    }

    /// Creates a supplier.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut data: CreateSupplier,
    ) -> Result<Supplier, AppError> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Supplier name is required"));
        }
        data.created_by = ctx.user_id;

        let supplier = self.supplier_repo.create(&data).await?;

        self.audit.record(
            "Supplier",
            supplier.id,
            ctx.user_id,
            AuditAction::Create,
            None,
            serde_json::to_value(&supplier).ok(),
            &ctx.meta,
        );

        info!(supplier_id = %supplier.id, actor = %ctx.user_id, "Supplier created");

        Ok(supplier)
    }

    /// Updates a supplier.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateSupplier,
    ) -> Result<Supplier, AppError> {
        let before = self.get(id).await?;
        let after = self.supplier_repo.update(id, &data).await?;

        self.audit.record(
            "Supplier",
            id,
            ctx.user_id,
            AuditAction::Update,
            serde_json::to_value(&before).ok(),
            serde_json::to_value(&after).ok(),
            &ctx.meta,
        );

        info!(supplier_id = %id, actor = %ctx.user_id, "Supplier updated");

        Ok(after)
    }

    /// Deletes a supplier.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let before = self.get(id).await?;

        let deleted = self.supplier_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found("Supplier not found"));
        }

        self.audit.record(
            "Supplier",
            id,
            ctx.user_id,
            AuditAction::Delete,
            serde_json::to_value(&before).ok(),
            None,
            &ctx.meta,
        );

        info!(supplier_id = %id, actor = %ctx.user_id, "Supplier deleted");

        Ok(())
    }
}
