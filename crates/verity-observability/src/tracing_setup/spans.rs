//! Span definitions per operation: resolution, synthesis.

/// Create a resolution span.
#[macro_export]
macro_rules! resolution_span {
    ($entity_id:expr, $candidates:expr) => {
        $crate::tracing::info_span!(
            "verity.resolution",
            entity_id = %$entity_id,
            candidates = $candidates
        )
    };
}

/// Create a synthesis span. `model_version` identifies the generator.
#[macro_export]
macro_rules! synthesis_span {
    ($entity_id:expr, $model_version:expr) => {
        $crate::tracing::info_span!(
            "verity.synthesis",
            entity_id = %$entity_id,
            model_version = %$model_version
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RESOLUTION: &str = "verity.resolution";
    pub const SYNTHESIS: &str = "verity.synthesis";
}
