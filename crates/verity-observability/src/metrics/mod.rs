//! In-process counters.

mod synthesis_metrics;

pub use synthesis_metrics::{SynthesisMetrics, SynthesisMetricsSnapshot};
