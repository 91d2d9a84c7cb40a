//! Current synthesis per entity and its citation edges.

use std::collections::BTreeSet;

use rusqlite::{params, Connection, OptionalExtension};

use verity_core::models::Synthesis;
use verity_core::{Confidence, VerityResult};

use super::parse_dt;
use crate::to_storage_err;

/// Read the current synthesis for an entity with its citations.
pub fn current_synthesis(conn: &Connection, entity_id: &str) -> VerityResult<Option<Synthesis>> {
    let row = conn
        .query_row(
            "SELECT id, synthesis_text, confidence_score, model_version, created_at
             FROM syntheses WHERE entity_id = ?1",
            params![entity_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((id, synthesis_text, confidence, model_version, created_at)) = row else {
        return Ok(None);
    };

    let mut stmt = conn
        .prepare("SELECT assertion_id FROM synthesis_citations WHERE synthesis_id = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let cited_assertion_ids: BTreeSet<String> = stmt
        .query_map(params![id], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<_, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    Ok(Some(Synthesis {
        entity_id: entity_id.to_string(),
        synthesis_text,
        confidence_score: Confidence::new(confidence),
        model_version,
        cited_assertion_ids,
        created_at: parse_dt("created_at", &created_at)?,
        id,
    }))
}

/// Supersede the entity's current synthesis with `synthesis`.
///
/// Delete-then-insert runs in one transaction: on any error the previous
/// synthesis and its citations are left in place.
pub fn replace_current(conn: &Connection, synthesis: &Synthesis) -> VerityResult<()> {
    super::in_transaction(conn, "replace_current", |tx| replace_inner(tx, synthesis))
}

fn replace_inner(conn: &Connection, synthesis: &Synthesis) -> VerityResult<()> {
    conn.execute(
        "DELETE FROM synthesis_citations WHERE synthesis_id IN
            (SELECT id FROM syntheses WHERE entity_id = ?1)",
        params![synthesis.entity_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    conn.execute(
        "DELETE FROM syntheses WHERE entity_id = ?1",
        params![synthesis.entity_id],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    conn.execute(
        "INSERT INTO syntheses (id, entity_id, synthesis_text, confidence_score, model_version, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            synthesis.id,
            synthesis.entity_id,
            synthesis.synthesis_text,
            synthesis.confidence_score.value(),
            synthesis.model_version,
            synthesis.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert synthesis {}: {e}", synthesis.id)))?;

    let mut stmt = conn
        .prepare("INSERT INTO synthesis_citations (synthesis_id, assertion_id) VALUES (?1, ?2)")
        .map_err(|e| to_storage_err(e.to_string()))?;
    for assertion_id in &synthesis.cited_assertion_ids {
        stmt.execute(params![synthesis.id, assertion_id])
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

/// Number of stored syntheses for an entity. At most one after any
/// completed replace.
pub fn count_for_entity(conn: &Connection, entity_id: &str) -> VerityResult<usize> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM syntheses WHERE entity_id = ?1",
            params![entity_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}
