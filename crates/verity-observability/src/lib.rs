//! # verity-observability
//!
//! Tracing subscriber setup driven by [`ObservabilityConfig`], span macros
//! for resolution and synthesis, structured events for the notable
//! outcomes of a regeneration, and in-process synthesis counters.
//!
//! [`ObservabilityConfig`]: verity_core::config::ObservabilityConfig

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{SynthesisMetrics, SynthesisMetricsSnapshot};
pub use tracing_setup::{events, init_tracing};

#[doc(hidden)]
pub use tracing;
