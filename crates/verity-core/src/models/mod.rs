mod aggregate;
mod audit_entry;
mod entity;
mod generation;
mod resolution;
mod synthesis;

pub use aggregate::{AggregateStatus, KnowledgeStatus, WinningSourceType};
pub use audit_entry::{AuditActor, AuditEntry, AuditOperation};
pub use entity::{EntityDescriptor, EntityKind};
pub use generation::{ContextAssertion, GenerationRequest};
pub use resolution::{ResolutionReason, ResolutionResult};
pub use synthesis::Synthesis;
