//! Log every knowledge mutation: synthesis regeneration, review status
//! changes, re-verification.

use rusqlite::Connection;

use verity_core::models::{AuditActor, AuditEntry, AuditOperation};
use verity_core::{AssertionStatus, VerityResult};

use crate::queries::audit_ops;

/// Append-only audit logger. Wraps the audit_ops query functions
/// with a convenient API.
pub struct AuditLogger;

impl AuditLogger {
    /// Append a fully-formed entry.
    pub fn append(conn: &Connection, entry: &AuditEntry) -> VerityResult<()> {
        audit_ops::insert_audit_entry(conn, entry)
    }

    /// Log a mutation of `entity_id` stamped with the current time.
    pub fn log(
        conn: &Connection,
        entity_id: &str,
        operation: AuditOperation,
        actor: AuditActor,
        details: serde_json::Value,
    ) -> VerityResult<()> {
        let entry = AuditEntry {
            entity_id: entity_id.to_string(),
            operation,
            details,
            actor,
            timestamp: chrono::Utc::now(),
        };
        Self::append(conn, &entry)
    }

    /// Log a review status transition.
    pub fn log_status_change(
        conn: &Connection,
        entity_id: &str,
        assertion_id: &str,
        from: AssertionStatus,
        to: AssertionStatus,
        actor: AuditActor,
    ) -> VerityResult<()> {
        Self::log(
            conn,
            entity_id,
            AuditOperation::StatusChanged,
            actor,
            serde_json::json!({
                "assertion_id": assertion_id,
                "from": from.as_str(),
                "to": to.as_str(),
            }),
        )
    }

    /// Log an explicit re-verification.
    pub fn log_reverified(
        conn: &Connection,
        entity_id: &str,
        assertion_id: &str,
        actor: AuditActor,
    ) -> VerityResult<()> {
        Self::log(
            conn,
            entity_id,
            AuditOperation::Reverified,
            actor,
            serde_json::json!({ "assertion_id": assertion_id }),
        )
    }
}
