use crate::errors::VerityResult;
use crate::models::Synthesis;

/// Persistence for current syntheses and their citation edges.
pub trait ISynthesisStore: Send + Sync {
    /// The current synthesis for the entity, if any.
    fn current(&self, entity_id: &str) -> VerityResult<Option<Synthesis>>;

    /// Atomically supersede whatever synthesis is current for
    /// `synthesis.entity_id` and make `synthesis` current. On error the
    /// previous synthesis stays current.
    fn replace_current(&self, synthesis: &Synthesis) -> VerityResult<()>;
}
