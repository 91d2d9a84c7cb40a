//! Synthesis outcome counters: generated, failed, empty context, dropped
//! citations.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Lock-free counters shared by an orchestrator.
#[derive(Debug, Default)]
pub struct SynthesisMetrics {
    generated: AtomicU64,
    failed: AtomicU64,
    empty_context: AtomicU64,
    citations_dropped: AtomicU64,
}

/// Point-in-time copy of [`SynthesisMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisMetricsSnapshot {
    pub generated: u64,
    pub failed: u64,
    pub empty_context: u64,
    pub citations_dropped: u64,
}

impl SynthesisMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_generated(&self, dropped_citations: usize) {
        self.generated.fetch_add(1, Ordering::Relaxed);
        self.citations_dropped
            .fetch_add(dropped_citations as u64, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_empty_context(&self) {
        self.empty_context.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SynthesisMetricsSnapshot {
        SynthesisMetricsSnapshot {
            generated: self.generated.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            empty_context: self.empty_context.load(Ordering::Relaxed),
            citations_dropped: self.citations_dropped.load(Ordering::Relaxed),
        }
    }

    /// Fraction of attempts that ended in a persisted synthesis. Empty
    /// contexts are not attempts.
    pub fn success_rate(&self) -> f64 {
        let generated = self.generated.load(Ordering::Relaxed) as f64;
        let failed = self.failed.load(Ordering::Relaxed) as f64;
        let total = generated + failed;
        if total < f64::EPSILON {
            0.0
        } else {
            generated / total
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate() {
        let metrics = SynthesisMetrics::new();
        metrics.record_generated(2);
        metrics.record_generated(0);
        metrics.record_failed();
        metrics.record_empty_context();

        let snap = metrics.snapshot();
        assert_eq!(snap.generated, 2);
        assert_eq!(snap.failed, 1);
        assert_eq!(snap.empty_context, 1);
        assert_eq!(snap.citations_dropped, 2);
        assert!((metrics.success_rate() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn success_rate_without_attempts_is_zero() {
        let metrics = SynthesisMetrics::new();
        metrics.record_empty_context();
        assert_eq!(metrics.success_rate(), 0.0);
    }
}
