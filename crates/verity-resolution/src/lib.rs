//! # verity-resolution
//!
//! Decides which of several competing assertions is authoritative and
//! reports the aggregate knowledge status of an entity.
//!
//! - [`resolve_conflict`] ranks candidates for one fact slot by
//!   `(source_type, status, confidence)`, descending.
//! - [`resolve_knowledge_conflict`] aggregates every assertion on an entity,
//!   slotting by assertion kind.
//! - [`get_column_conflict_status`] does the same for a column, slotting by
//!   provenance channel.
//! - [`TrustResolver`] wraps the above with configuration, optionally
//!   treating approvals whose freshness has expired as still under review.
//!
//! All functions are pure.

pub mod aggregate;
pub mod conflict;
pub mod engine;
pub mod rank;

pub use aggregate::{get_column_conflict_status, resolve_knowledge_conflict, resolve_table_status};
pub use conflict::resolve_conflict;
pub use engine::TrustResolver;
pub use rank::RankKey;
