//! Structured log events for synthesis and resolution.
//!
//! Each function emits a `tracing` event with structured fields.

/// A synthesis replaced the entity's previous one.
pub fn synthesis_generated(
    entity_id: &str,
    synthesis_id: &str,
    confidence: f64,
    citation_count: usize,
    model_version: &str,
) {
    tracing::info!(
        event = "synthesis_generated",
        entity_id = %entity_id,
        synthesis_id = %synthesis_id,
        confidence = confidence,
        citation_count = citation_count,
        model_version = %model_version,
        "synthesis generated"
    );
}

/// The generator cited ids outside the context.
pub fn citations_dropped(entity_id: &str, dropped: &[String]) {
    tracing::warn!(
        event = "citations_dropped",
        entity_id = %entity_id,
        dropped_count = dropped.len(),
        dropped_ids = ?dropped,
        "citations outside the generation context dropped"
    );
}

/// Generation failed; nothing was persisted.
pub fn generation_failed(entity_id: &str, error: &str) {
    tracing::warn!(
        event = "generation_failed",
        entity_id = %entity_id,
        error = %error,
        "synthesis generation failed"
    );
}

/// An aggregate resolved to `conflict`.
pub fn conflict_detected(entity_id: &str, total_count: usize, approved_count: usize) {
    tracing::info!(
        event = "conflict_detected",
        entity_id = %entity_id,
        total_count = total_count,
        approved_count = approved_count,
        "conflicting knowledge detected"
    );
}

/// Appending the audit record failed after a committed replace.
pub fn audit_append_failed(entity_id: &str, error: &str) {
    tracing::warn!(
        event = "audit_append_failed",
        entity_id = %entity_id,
        error = %error,
        "audit append failed after synthesis commit"
    );
}
