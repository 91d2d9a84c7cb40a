//! # verity-synthesis
//!
//! Regenerates an entity's synthesis from its approved assertions:
//! bounded context, one call to an [`ISynthesisGenerator`], contract
//! validation, citation filtering, and an atomic replace of the previous
//! synthesis followed by one audit record.
//!
//! [`ISynthesisGenerator`]: verity_core::traits::ISynthesisGenerator

pub mod citations;
pub mod context;
pub mod contract;
pub mod engine;
pub mod locks;

pub use citations::{filter_citations, CitationFilter};
pub use context::{ContextBuilder, GenerationContext, TokenBudget, TokenCounter};
pub use contract::{parse_response, GeneratedPayload};
pub use engine::SynthesisOrchestrator;
pub use locks::{EntityGuard, EntityLocks};
