//! Audit log repository implementation.
//!
//! The audit trail is append-only: the application never updates or
//! deletes entries.

use sqlx::PgPool;
use uuid::Uuid;

use brigade_core::error::{AppError, ErrorKind};
use brigade_core::pagination::{PageRequest, PageResponse};
use brigade_core::result::AppResult;
use brigade_entity::audit::{AuditAction, AuditEntry, CreateAuditEntry};

/// Repository for audit log entries.
#[derive(Debug, Clone)]
pub struct AuditRepository {
    pool: PgPool,
}

impl AuditRepository {
    /// Create a new audit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Append an audit entry.
    pub async fn create(&self, data: &CreateAuditEntry) -> AppResult<AuditEntry> {
        sqlx::query_as::<_, AuditEntry>(
            "INSERT INTO audit_log (record_type, record_id, user_id, action, before, after, \
                                    ip_address, user_agent) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(&data.record_type)
        .bind(data.record_id)
        .bind(data.user_id)
        .bind(data.action)
        .bind(&data.before)
        .bind(&data.after)
        .bind(&data.ip_address)
        .bind(&data.user_agent)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create audit entry", e))
    }

    /// Search the audit log with optional filters, newest first.
    pub async fn search(
        &self,
        record_type: Option<&str>,
        record_id: Option<Uuid>,
        user_id: Option<Uuid>,
        action: Option<AuditAction>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AuditEntry>> {
        let mut conditions = Vec::new();
        let mut param_idx = 1u32;

        if record_type.is_some() {
            conditions.push(format!("record_type = ${param_idx}"));
            param_idx += 1;
        }
        if record_id.is_some() {
            conditions.push(format!("record_id = ${param_idx}"));
            param_idx += 1;
        }
        if user_id.is_some() {
            conditions.push(format!("user_id = ${param_idx}"));
            param_idx += 1;
        }
        if action.is_some() {
            conditions.push(format!("action = ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_sql = format!("SELECT COUNT(*) FROM audit_log {where_clause}");
        let select_sql = format!(
            "SELECT * FROM audit_log {where_clause} ORDER BY created_at DESC LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        let mut select_query = sqlx::query_as::<_, AuditEntry>(&select_sql);

        if let Some(rt) = record_type {
            count_query = count_query.bind(rt.to_string());
            select_query = select_query.bind(rt.to_string());
        }
        if let Some(rid) = record_id {
            count_query = count_query.bind(rid);
            select_query = select_query.bind(rid);
        }
        if let Some(uid) = user_id {
            count_query = count_query.bind(uid);
            select_query = select_query.bind(uid);
        }
        if let Some(a) = action {
            count_query = count_query.bind(a);
            select_query = select_query.bind(a);
        }

        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count audit entries", e)
        })?;

        let entries = select_query
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search audit log", e)
            })?;

        Ok(PageResponse::new(
            entries,
            page.page,
            page.page_size,
            total as u64,
        ))
    }
}
