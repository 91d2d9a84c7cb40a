//! # verity-core
//!
//! Foundation crate for the Verity knowledge trust engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod assertion;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use assertion::{
    AssertionKind, AssertionStatus, BilingualText, Confidence, KnowledgeAssertion, SourceType,
};
pub use config::VerityConfig;
pub use errors::{VerityError, VerityResult};
pub use models::{AggregateStatus, EntityDescriptor, ResolutionResult, Synthesis};
