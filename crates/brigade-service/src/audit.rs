//! Fire-and-forget audit recording.
//!
//! Audit persistence is best-effort by design: a failed audit write must
//! never fail or roll back the operation it describes. Entries are
//! written on a detached task after the primary operation's success is
//! already determined, and persistence errors are logged and swallowed.

use std::sync::Arc;

use serde_json::Value;
use tracing::error;
use uuid::Uuid;

use brigade_database::repositories::audit::AuditRepository;
use brigade_entity::audit::{AuditAction, CreateAuditEntry};

use crate::context::RequestMeta;

/// Placeholder written in place of secret material in snapshots.
const REDACTED: &str = "***";

/// Records audit entries on a detached task.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    /// Audit repository.
    repo: Arc<AuditRepository>,
}

impl AuditRecorder {
    /// Creates a new audit recorder.
    pub fn new(repo: Arc<AuditRepository>) -> Self {
        Self { repo }
    }

    /// Records an audit entry without blocking or failing the caller.
    ///
    /// Snapshots are redacted before the write so secret material never
    /// reaches the trail, even as "after" state.
    pub fn record(
        &self,
        record_type: &str,
        record_id: Uuid,
        user_id: Uuid,
        action: AuditAction,
        before: Option<Value>,
        after: Option<Value>,
        meta: &RequestMeta,
    ) {
        let entry = CreateAuditEntry {
            record_type: record_type.to_string(),
            record_id,
            user_id,
            action,
            before: before.map(redact_secrets),
            after: after.map(redact_secrets),
            ip_address: meta.ip_address.clone(),
            user_agent: meta.user_agent.clone(),
        };

        let repo = Arc::clone(&self.repo);
        tokio::spawn(async move {
            if let Err(e) = repo.create(&entry).await {
                error!(
                    record_type = %entry.record_type,
                    record_id = %entry.record_id,
                    action = %entry.action,
                    error = %e,
                    "Failed to create audit entry"
                );
            }
        });
    }
}

/// Replaces secret fields in a snapshot with a fixed placeholder.
fn redact_secrets(mut value: Value) -> Value {
    if let Some(map) = value.as_object_mut() {
        if let Some(hash) = map.get_mut("password_hash") {
            *hash = Value::String(REDACTED.to_string());
        }
    }
    value
}

/// A snapshot object marking only that the password hash changed.
pub fn password_change_snapshot() -> Value {
    serde_json::json!({ "password_hash": REDACTED })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_password_hash_redacted() {
        let snapshot = json!({
            "email": "a@b.com",
            "password_hash": "$argon2id$v=19$m=19456...",
        });

        let redacted = redact_secrets(snapshot);
        assert_eq!(redacted["password_hash"], REDACTED);
        assert_eq!(redacted["email"], "a@b.com");
    }

    #[test]
    fn test_snapshot_without_secrets_untouched() {
        let snapshot = json!({ "name": "Olive oil", "cost_per_unit": 12.5 });
        assert_eq!(redact_secrets(snapshot.clone()), snapshot);
    }
}
