use serde::{Deserialize, Serialize};

use super::entity::EntityDescriptor;
use crate::assertion::{AssertionKind, AssertionStatus, BilingualText};

/// One approved assertion as presented to the generative function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextAssertion {
    pub id: String,
    pub kind: AssertionKind,
    pub content: BilingualText,
    pub author: Option<String>,
    pub status: AssertionStatus,
}

/// Everything the generative function receives: instructions, the entity
/// descriptor, and the enumerated approved-assertion context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub system_instructions: String,
    pub entity: EntityDescriptor,
    pub assertions: Vec<ContextAssertion>,
    /// The context rendered as prompt text.
    pub prompt: String,
}

impl GenerationRequest {
    /// IDs a response may legitimately cite.
    pub fn citable_ids(&self) -> impl Iterator<Item = &str> {
        self.assertions.iter().map(|a| a.id.as_str())
    }
}
