//! Insert and look up entity descriptors.

use rusqlite::{params, Connection, OptionalExtension};

use verity_core::models::{EntityDescriptor, EntityKind};
use verity_core::VerityResult;

use super::parse_dt;
use crate::{corrupt_row, to_storage_err};

const SELECT_COLUMNS: &str =
    "SELECT id, kind, path, data_type, description, parent_id, created_at FROM entities";

fn kind_str(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Table => "table",
        EntityKind::Column => "column",
    }
}

fn parse_kind(s: &str) -> VerityResult<EntityKind> {
    match s {
        "table" => Ok(EntityKind::Table),
        "column" => Ok(EntityKind::Column),
        other => Err(corrupt_row(format!("unknown entity kind '{other}'"))),
    }
}

/// Insert or replace an entity descriptor.
pub fn upsert_entity(conn: &Connection, entity: &EntityDescriptor) -> VerityResult<()> {
    conn.execute(
        "INSERT INTO entities (id, kind, path, data_type, description, parent_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(id) DO UPDATE SET
            kind = excluded.kind,
            path = excluded.path,
            data_type = excluded.data_type,
            description = excluded.description,
            parent_id = excluded.parent_id",
        params![
            entity.id,
            kind_str(entity.kind),
            entity.path,
            entity.data_type,
            entity.description,
            entity.parent_id,
            entity.created_at.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(format!("upsert entity {}: {e}", entity.id)))?;
    Ok(())
}

pub fn get_entity(conn: &Connection, id: &str) -> VerityResult<Option<EntityDescriptor>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} WHERE id = ?1"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let row = stmt
        .query_row(params![id], |row| Ok(row_to_entity(row)))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.transpose()
}

/// Column entities whose parent is `table_id`, ordered by path.
pub fn columns_of(conn: &Connection, table_id: &str) -> VerityResult<Vec<EntityDescriptor>> {
    let mut stmt = conn
        .prepare(&format!(
            "{SELECT_COLUMNS} WHERE parent_id = ?1 AND kind = 'column' ORDER BY path"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![table_id], |row| Ok(row_to_entity(row)))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut out = Vec::new();
    for row in rows {
        out.push(row.map_err(|e| to_storage_err(e.to_string()))??);
    }
    Ok(out)
}

fn row_to_entity(row: &rusqlite::Row<'_>) -> VerityResult<EntityDescriptor> {
    let get_err = |e: rusqlite::Error| to_storage_err(e.to_string());
    let kind: String = row.get(1).map_err(get_err)?;
    let created_at: String = row.get(6).map_err(get_err)?;
    Ok(EntityDescriptor {
        id: row.get(0).map_err(get_err)?,
        kind: parse_kind(&kind)?,
        path: row.get(2).map_err(get_err)?,
        data_type: row.get(3).map_err(get_err)?,
        description: row.get(4).map_err(get_err)?,
        parent_id: row.get(5).map_err(get_err)?,
        created_at: parse_dt("created_at", &created_at)?,
    })
}
