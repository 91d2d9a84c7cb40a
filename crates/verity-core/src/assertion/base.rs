use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::confidence::Confidence;
use super::content::BilingualText;
use super::kind::AssertionKind;
use super::provenance::SourceType;
use super::status::AssertionStatus;
use crate::errors::{VerityError, VerityResult};
use crate::models::EntityDescriptor;

/// An atomic claim about one data entity.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct KnowledgeAssertion {
    /// Stable unique identifier.
    pub id: String,
    /// The entity this assertion belongs to.
    pub entity_id: String,
    pub source_type: SourceType,
    pub status: AssertionStatus,
    pub kind: AssertionKind,
    pub content: BilingualText,
    /// Display name of the author, when known.
    #[serde(default)]
    pub author: Option<String>,
    /// Marks the organization's official definition for the entity.
    #[serde(default)]
    pub is_canonical: bool,
    /// Last explicit re-verification.
    #[serde(default)]
    pub verified_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    /// Only meaningful for model-sourced assertions.
    #[serde(default)]
    pub confidence: Option<Confidence>,
}

impl KnowledgeAssertion {
    /// `(human, approved)`: the combination that resolves conflicts outright.
    pub fn is_human_approved(&self) -> bool {
        self.source_type == SourceType::Human && self.status.is_approved()
    }

    /// `verified_at` when present, otherwise `updated_at`.
    pub fn reference_date(&self) -> DateTime<Utc> {
        self.verified_at.unwrap_or(self.updated_at)
    }

    /// Confidence used for ranking; absent means zero.
    pub fn ranking_confidence(&self) -> Confidence {
        self.confidence.unwrap_or(Confidence::ZERO)
    }

    /// Check the field-level invariants that do not depend on the entity.
    pub fn validate(&self, now: DateTime<Utc>) -> VerityResult<()> {
        if self.id.trim().is_empty() {
            return Err(VerityError::ValidationError(
                "assertion id must not be empty".into(),
            ));
        }
        if self.entity_id.trim().is_empty() {
            return Err(VerityError::ValidationError(format!(
                "assertion {} has no entity",
                self.id
            )));
        }
        if !self.content.is_populated() {
            return Err(VerityError::ValidationError(format!(
                "assertion {} has no populated content language",
                self.id
            )));
        }
        if let Some(c) = self.confidence {
            if !(0.0..=1.0).contains(&c.value()) {
                return Err(VerityError::ValidationError(format!(
                    "assertion {} confidence {} outside [0, 1]",
                    self.id, c
                )));
            }
        }
        if let Some(verified_at) = self.verified_at {
            if verified_at > now {
                return Err(VerityError::ValidationError(format!(
                    "assertion {} verified in the future ({})",
                    self.id, verified_at
                )));
            }
        }
        Ok(())
    }

    /// Field-level checks plus the entity-scoped invariants: the assertion
    /// belongs to `entity` and was not verified before the entity existed.
    pub fn validate_for_entity(
        &self,
        entity: &EntityDescriptor,
        now: DateTime<Utc>,
    ) -> VerityResult<()> {
        self.validate(now)?;
        if self.entity_id != entity.id {
            return Err(VerityError::ValidationError(format!(
                "assertion {} belongs to {}, not {}",
                self.id, self.entity_id, entity.id
            )));
        }
        if let Some(verified_at) = self.verified_at {
            if verified_at < entity.created_at {
                return Err(VerityError::ValidationError(format!(
                    "assertion {} verified before entity {} was created",
                    self.id, entity.id
                )));
            }
        }
        Ok(())
    }
}

/// Identity equality: two assertions are equal if they share an ID.
impl PartialEq for KnowledgeAssertion {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
