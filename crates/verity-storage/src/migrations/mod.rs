//! Schema migrations using PRAGMA user_version.

pub mod v001_entities;
pub mod v002_syntheses;
pub mod v003_audit_log;

use rusqlite::Connection;

use verity_core::errors::StorageError;
use verity_core::VerityResult;

/// Latest schema version.
pub const LATEST_VERSION: u32 = 3;

fn migration_err(version: u32, reason: impl ToString) -> StorageError {
    StorageError::MigrationFailed {
        version,
        reason: reason.to_string(),
    }
}

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> VerityResult<()> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[
        (v001_entities::MIGRATION_SQL, 1),
        (v002_syntheses::MIGRATION_SQL, 2),
        (v003_audit_log::MIGRATION_SQL, 3),
    ];

    for (sql, version) in migrations {
        if current >= *version {
            continue;
        }
        conn.execute_batch(sql)
            .map_err(|e| migration_err(*version, e))?;
        conn.pragma_update(None, "user_version", version)
            .map_err(|e| migration_err(*version, e))?;
        tracing::info!(version = version, "applied migration");
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> VerityResult<u32> {
    let version = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| migration_err(0, e))?;
    Ok(version)
}
