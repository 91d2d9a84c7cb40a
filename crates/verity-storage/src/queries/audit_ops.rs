//! Append and query the audit log.

use rusqlite::{params, Connection};

use verity_core::models::{AuditActor, AuditEntry, AuditOperation};
use verity_core::VerityResult;

use super::parse_dt;
use crate::{corrupt_row, to_storage_err};

pub fn insert_audit_entry(conn: &Connection, entry: &AuditEntry) -> VerityResult<()> {
    let details = serde_json::to_string(&entry.details)?;
    conn.execute(
        "INSERT INTO audit_log (entity_id, operation, details, actor, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            entry.entity_id,
            entry.operation.as_str(),
            details,
            entry.actor.as_str(),
            entry.timestamp.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Entries for one entity, oldest first.
pub fn query_by_entity(conn: &Connection, entity_id: &str) -> VerityResult<Vec<AuditEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT entity_id, operation, details, actor, timestamp
             FROM audit_log WHERE entity_id = ?1 ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![entity_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        let (entity_id, operation, details, actor, timestamp) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        out.push(AuditEntry {
            operation: AuditOperation::parse(&operation)
                .ok_or_else(|| corrupt_row(format!("audit operation '{operation}'")))?,
            details: serde_json::from_str(&details)?,
            actor: AuditActor::parse(&actor)
                .ok_or_else(|| corrupt_row(format!("audit actor '{actor}'")))?,
            timestamp: parse_dt("timestamp", &timestamp)?,
            entity_id,
        });
    }
    Ok(out)
}
