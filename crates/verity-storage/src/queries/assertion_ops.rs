//! Insert, read, and re-status knowledge assertions.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use verity_core::{
    AssertionKind, AssertionStatus, BilingualText, Confidence, KnowledgeAssertion, SourceType,
    VerityError, VerityResult,
};

use super::parse_dt;
use crate::{corrupt_row, to_storage_err};

const SELECT_COLUMNS: &str = "SELECT id, entity_id, source_type, status, kind, content_primary,
        content_secondary, author, is_canonical, verified_at, updated_at, confidence
    FROM assertions";

/// Insert or replace an assertion. The entity must already exist.
pub fn upsert_assertion(conn: &Connection, assertion: &KnowledgeAssertion) -> VerityResult<()> {
    conn.execute(
        "INSERT INTO assertions (
            id, entity_id, source_type, status, kind, content_primary, content_secondary,
            author, is_canonical, verified_at, updated_at, confidence
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
        ON CONFLICT(id) DO UPDATE SET
            entity_id = excluded.entity_id,
            source_type = excluded.source_type,
            status = excluded.status,
            kind = excluded.kind,
            content_primary = excluded.content_primary,
            content_secondary = excluded.content_secondary,
            author = excluded.author,
            is_canonical = excluded.is_canonical,
            verified_at = excluded.verified_at,
            updated_at = excluded.updated_at,
            confidence = excluded.confidence",
        params![
            assertion.id,
            assertion.entity_id,
            assertion.source_type.as_str(),
            assertion.status.as_str(),
            assertion.kind.as_str(),
            assertion.content.primary,
            assertion.content.secondary,
            assertion.author,
            assertion.is_canonical as i32,
            assertion.verified_at.map(|t| t.to_rfc3339()),
            assertion.updated_at.to_rfc3339(),
            assertion.confidence.map(|c| c.value()),
        ],
    )
    .map_err(|e| to_storage_err(format!("upsert assertion {}: {e}", assertion.id)))?;
    Ok(())
}

pub fn get_assertion(conn: &Connection, id: &str) -> VerityResult<Option<KnowledgeAssertion>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let row = stmt
        .query_row(params![id], |row| Ok(row_to_assertion(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.transpose()
}

/// Assertions of an entity in insertion order, optionally only approved ones.
pub fn assertions_for_entity(
    conn: &Connection,
    entity_id: &str,
    approved_only: bool,
) -> VerityResult<Vec<KnowledgeAssertion>> {
    let sql = if approved_only {
        format!("{SELECT_COLUMNS} WHERE entity_id = ?1 AND status = 'approved' ORDER BY rowid")
    } else {
        format!("{SELECT_COLUMNS} WHERE entity_id = ?1 ORDER BY rowid")
    };
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![entity_id], |row| Ok(row_to_assertion(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(out)
}

/// Move an assertion through the review workflow.
pub fn update_status(
    conn: &Connection,
    id: &str,
    status: AssertionStatus,
    at: DateTime<Utc>,
) -> VerityResult<()> {
    let changed = conn
        .execute(
            "UPDATE assertions SET status = ?2, updated_at = ?3 WHERE id = ?1",
            params![id, status.as_str(), at.to_rfc3339()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if changed == 0 {
        return Err(VerityError::ValidationError(format!(
            "unknown assertion {id}"
        )));
    }
    Ok(())
}

/// Record an explicit re-verification, restarting the freshness clock.
pub fn mark_verified(conn: &Connection, id: &str, at: DateTime<Utc>) -> VerityResult<()> {
    let changed = conn
        .execute(
            "UPDATE assertions SET verified_at = ?2 WHERE id = ?1",
            params![id, at.to_rfc3339()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if changed == 0 {
        return Err(VerityError::ValidationError(format!(
            "unknown assertion {id}"
        )));
    }
    Ok(())
}

fn row_to_assertion(row: &rusqlite::Row<'_>) -> VerityResult<KnowledgeAssertion> {
    let get_err = |e: rusqlite::Error| to_storage_err(e.to_string());

    let id: String = row.get(0).map_err(get_err)?;
    let source: String = row.get(2).map_err(get_err)?;
    let status: String = row.get(3).map_err(get_err)?;
    let kind: String = row.get(4).map_err(get_err)?;
    let canonical: i32 = row.get(8).map_err(get_err)?;
    let verified_at: Option<String> = row.get(9).map_err(get_err)?;
    let updated_at: String = row.get(10).map_err(get_err)?;
    let confidence: Option<f64> = row.get(11).map_err(get_err)?;

    let source_type = SourceType::parse(&source)
        .ok_or_else(|| corrupt_row(format!("assertion {id}: source_type '{source}'")))?;
    let status = AssertionStatus::parse(&status)
        .ok_or_else(|| corrupt_row(format!("assertion {id}: status '{status}'")))?;
    let kind = AssertionKind::parse(&kind)
        .ok_or_else(|| corrupt_row(format!("assertion {id}: kind '{kind}'")))?;

    Ok(KnowledgeAssertion {
        entity_id: row.get(1).map_err(get_err)?,
        source_type,
        status,
        kind,
        content: BilingualText {
            primary: row.get(5).map_err(get_err)?,
            secondary: row.get(6).map_err(get_err)?,
        },
        author: row.get(7).map_err(get_err)?,
        is_canonical: canonical != 0,
        verified_at: verified_at
            .as_deref()
            .map(|s| parse_dt("verified_at", s))
            .transpose()?,
        updated_at: parse_dt("updated_at", &updated_at)?,
        confidence: confidence.map(Confidence::new),
        id,
    })
}
