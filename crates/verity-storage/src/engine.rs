//! StorageEngine: owns the connection, runs migrations at open, implements
//! IAssertionSource + ISynthesisStore + IAuditSink.

use std::path::Path;

use chrono::{DateTime, Utc};

use verity_core::config::StorageConfig;
use verity_core::models::{AuditActor, AuditEntry, EntityDescriptor, Synthesis};
use verity_core::traits::{IAssertionSource, IAuditSink, ISynthesisStore};
use verity_core::{AssertionStatus, KnowledgeAssertion, VerityError, VerityResult};

use crate::audit::AuditLogger;
use crate::migrations;
use crate::pool::WriteConnection;
use crate::queries::{self, assertion_ops, audit_ops, entity_ops, synthesis_ops};

/// SQLite-backed store for entities, assertions, syntheses, and the audit log.
pub struct StorageEngine {
    conn: WriteConnection,
}

impl StorageEngine {
    /// Open a storage engine backed by a file on disk.
    pub fn open(path: &Path) -> VerityResult<Self> {
        Self::open_with(path, &StorageConfig::default())
    }

    /// Open the database named by `config.db_path`.
    pub fn from_config(config: &StorageConfig) -> VerityResult<Self> {
        Self::open_with(Path::new(&config.db_path), config)
    }

    fn open_with(path: &Path, config: &StorageConfig) -> VerityResult<Self> {
        let engine = Self {
            conn: WriteConnection::open(path, config.busy_timeout_ms)?,
        };
        engine.initialize()?;
        tracing::debug!(path = %path.display(), "storage opened");
        Ok(engine)
    }

    /// Open an in-memory storage engine (for testing).
    pub fn open_in_memory() -> VerityResult<Self> {
        let engine = Self {
            conn: WriteConnection::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> VerityResult<()> {
        self.conn.with_conn(migrations::run_migrations)
    }

    /// Current schema version.
    pub fn schema_version(&self) -> VerityResult<u32> {
        self.conn.with_conn(migrations::current_version)
    }

    pub fn upsert_entity(&self, entity: &EntityDescriptor) -> VerityResult<()> {
        if let Some(parent) = &entity.parent_id {
            if parent == &entity.id {
                return Err(VerityError::ValidationError(format!(
                    "entity {} cannot be its own parent",
                    entity.id
                )));
            }
        }
        self.conn
            .with_conn(|conn| entity_ops::upsert_entity(conn, entity))
    }

    /// Columns belonging to a table entity.
    pub fn columns_of(&self, table_id: &str) -> VerityResult<Vec<EntityDescriptor>> {
        self.conn
            .with_conn(|conn| entity_ops::columns_of(conn, table_id))
    }

    /// Validate and store an assertion. Its entity must exist.
    pub fn upsert_assertion(&self, assertion: &KnowledgeAssertion) -> VerityResult<()> {
        assertion.validate(Utc::now())?;
        self.conn.with_conn(|conn| {
            let entity = entity_ops::get_entity(conn, &assertion.entity_id)?.ok_or_else(|| {
                VerityError::EntityNotFound {
                    id: assertion.entity_id.clone(),
                }
            })?;
            assertion.validate_for_entity(&entity, Utc::now())?;
            assertion_ops::upsert_assertion(conn, assertion)
        })
    }

    pub fn get_assertion(&self, id: &str) -> VerityResult<Option<KnowledgeAssertion>> {
        self.conn
            .with_conn(|conn| assertion_ops::get_assertion(conn, id))
    }

    /// Move an assertion to `status` and audit the transition. The update
    /// and its audit entry commit together.
    pub fn update_assertion_status(
        &self,
        id: &str,
        status: AssertionStatus,
        actor: AuditActor,
        at: DateTime<Utc>,
    ) -> VerityResult<()> {
        self.conn.with_conn(|conn| {
            let existing = load_assertion(conn, id)?;
            queries::in_transaction(conn, "update_assertion_status", |tx| {
                assertion_ops::update_status(tx, id, status, at)?;
                AuditLogger::log_status_change(
                    tx,
                    &existing.entity_id,
                    id,
                    existing.status,
                    status,
                    actor,
                )
            })
        })
    }

    /// Restart an assertion's freshness clock at `at` and audit it.
    ///
    /// `at` may not lie in the future or before the entity was created.
    pub fn mark_verified(
        &self,
        id: &str,
        actor: AuditActor,
        at: DateTime<Utc>,
    ) -> VerityResult<()> {
        self.conn.with_conn(|conn| {
            let existing = load_assertion(conn, id)?;
            let entity = entity_ops::get_entity(conn, &existing.entity_id)?.ok_or_else(|| {
                VerityError::EntityNotFound {
                    id: existing.entity_id.clone(),
                }
            })?;
            let verified = KnowledgeAssertion {
                verified_at: Some(at),
                ..existing
            };
            verified.validate_for_entity(&entity, Utc::now())?;

            queries::in_transaction(conn, "mark_verified", |tx| {
                assertion_ops::mark_verified(tx, id, at)?;
                AuditLogger::log_reverified(tx, &entity.id, id, actor)
            })
        })
    }

    /// Number of stored syntheses for an entity.
    pub fn synthesis_count(&self, entity_id: &str) -> VerityResult<usize> {
        self.conn
            .with_conn(|conn| synthesis_ops::count_for_entity(conn, entity_id))
    }
}

fn load_assertion(conn: &rusqlite::Connection, id: &str) -> VerityResult<KnowledgeAssertion> {
    assertion_ops::get_assertion(conn, id)?
        .ok_or_else(|| VerityError::ValidationError(format!("unknown assertion {id}")))
}

impl IAssertionSource for StorageEngine {
    fn entity(&self, entity_id: &str) -> VerityResult<Option<EntityDescriptor>> {
        self.conn
            .with_conn(|conn| entity_ops::get_entity(conn, entity_id))
    }

    fn assertions(&self, entity_id: &str) -> VerityResult<Vec<KnowledgeAssertion>> {
        self.conn
            .with_conn(|conn| assertion_ops::assertions_for_entity(conn, entity_id, false))
    }

    fn approved_assertions(&self, entity_id: &str) -> VerityResult<Vec<KnowledgeAssertion>> {
        self.conn
            .with_conn(|conn| assertion_ops::assertions_for_entity(conn, entity_id, true))
    }
}

impl ISynthesisStore for StorageEngine {
    fn current(&self, entity_id: &str) -> VerityResult<Option<Synthesis>> {
        self.conn
            .with_conn(|conn| synthesis_ops::current_synthesis(conn, entity_id))
    }

    fn replace_current(&self, synthesis: &Synthesis) -> VerityResult<()> {
        self.conn
            .with_conn(|conn| synthesis_ops::replace_current(conn, synthesis))
    }
}

impl IAuditSink for StorageEngine {
    fn append(&self, entry: &AuditEntry) -> VerityResult<()> {
        self.conn.with_conn(|conn| AuditLogger::append(conn, entry))
    }

    fn query_by_entity(&self, entity_id: &str) -> VerityResult<Vec<AuditEntry>> {
        self.conn
            .with_conn(|conn| audit_ops::query_by_entity(conn, entity_id))
    }
}
