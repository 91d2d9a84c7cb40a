use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::assertion::Confidence;

/// Derived, non-authoritative summary of an entity's approved knowledge.
///
/// At most one is current per entity; `cited_assertion_ids` only ever
/// names approved assertions that were part of the generation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Synthesis {
    pub id: String,
    pub entity_id: String,
    pub synthesis_text: String,
    pub confidence_score: Confidence,
    /// Version identifier of the generative function.
    pub model_version: String,
    pub cited_assertion_ids: BTreeSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Synthesis {
    pub fn citation_count(&self) -> usize {
        self.cited_assertion_ids.len()
    }

    pub fn cites(&self, assertion_id: &str) -> bool {
        self.cited_assertion_ids.contains(assertion_id)
    }
}
