//! The generator response contract.
//!
//! `{ synthesisText: string, confidenceScore: number in [0, 1],
//! citedAssertionIds: string[] }`. Anything else is a schema violation.
//! The 2 to 4 sentence length is asked of the model, not checked here.

use serde::Deserialize;

use verity_core::errors::ExternalModelError;
use verity_core::{Confidence, VerityResult};

/// A response that satisfied the contract.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPayload {
    pub synthesis_text: String,
    pub confidence: Confidence,
    pub cited_assertion_ids: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResponse {
    synthesis_text: String,
    confidence_score: f64,
    cited_assertion_ids: Vec<String>,
}

fn violation(reason: impl Into<String>) -> ExternalModelError {
    ExternalModelError::SchemaViolation {
        reason: reason.into(),
    }
}

/// Validate a raw generator response.
pub fn parse_response(value: serde_json::Value) -> VerityResult<GeneratedPayload> {
    let raw: RawResponse =
        serde_json::from_value(value).map_err(|e| violation(e.to_string()))?;

    if raw.synthesis_text.trim().is_empty() {
        return Err(violation("synthesisText is empty").into());
    }
    let confidence = Confidence::try_new(raw.confidence_score).ok_or_else(|| {
        violation(format!(
            "confidenceScore {} outside [0, 1]",
            raw.confidence_score
        ))
    })?;

    Ok(GeneratedPayload {
        synthesis_text: raw.synthesis_text.trim().to_string(),
        confidence,
        cited_assertion_ids: raw.cited_assertion_ids,
    })
}
