pub mod base;
pub mod confidence;
pub mod content;
pub mod kind;
pub mod provenance;
pub mod status;

pub use base::KnowledgeAssertion;
pub use confidence::{Confidence, ConfidenceBand};
pub use content::BilingualText;
pub use kind::AssertionKind;
pub use provenance::{ProvenanceChannel, SourceType};
pub use status::AssertionStatus;
