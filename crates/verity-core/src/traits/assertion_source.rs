use crate::assertion::KnowledgeAssertion;
use crate::errors::VerityResult;
use crate::models::EntityDescriptor;

/// Read access to entities and their assertions, owned by the authoring
/// and review subsystem.
pub trait IAssertionSource: Send + Sync {
    /// Look up an entity descriptor.
    fn entity(&self, entity_id: &str) -> VerityResult<Option<EntityDescriptor>>;

    /// All assertions attached to the entity, any status.
    fn assertions(&self, entity_id: &str) -> VerityResult<Vec<KnowledgeAssertion>>;

    /// Only the assertions whose status is `approved`.
    fn approved_assertions(&self, entity_id: &str) -> VerityResult<Vec<KnowledgeAssertion>> {
        Ok(self
            .assertions(entity_id)?
            .into_iter()
            .filter(|a| a.status.is_approved())
            .collect())
    }
}
