use crate::errors::VerityResult;
use crate::models::AuditEntry;

/// Append-only audit store, queryable by entity.
pub trait IAuditSink: Send + Sync {
    fn append(&self, entry: &AuditEntry) -> VerityResult<()>;

    /// Entries for the entity, oldest first.
    fn query_by_entity(&self, entity_id: &str) -> VerityResult<Vec<AuditEntry>>;
}
