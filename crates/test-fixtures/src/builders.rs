//! Builders for assertions and entities with deterministic defaults.

use chrono::{DateTime, TimeZone, Utc};

use verity_core::models::{EntityDescriptor, EntityKind, Synthesis};
use verity_core::{
    AssertionKind, AssertionStatus, BilingualText, Confidence, KnowledgeAssertion, SourceType,
};

/// Fixed reference instant used across tests: 2026-06-01T12:00:00Z.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Fluent builder for [`KnowledgeAssertion`].
#[derive(Debug, Clone)]
pub struct AssertionBuilder {
    inner: KnowledgeAssertion,
}

impl AssertionBuilder {
    /// A human draft business rule on `entity-1`, updated at [`fixed_now`].
    pub fn new(id: &str) -> Self {
        Self {
            inner: KnowledgeAssertion {
                id: id.to_string(),
                entity_id: "entity-1".to_string(),
                source_type: SourceType::Human,
                status: AssertionStatus::Draft,
                kind: AssertionKind::BusinessRule,
                content: BilingualText::primary(format!("Fixture assertion {id}.")),
                author: Some("fixture-author".to_string()),
                is_canonical: false,
                verified_at: None,
                updated_at: fixed_now(),
                confidence: None,
            },
        }
    }

    pub fn entity(mut self, entity_id: &str) -> Self {
        self.inner.entity_id = entity_id.to_string();
        self
    }

    pub fn source(mut self, source_type: SourceType) -> Self {
        self.inner.source_type = source_type;
        self
    }

    pub fn status(mut self, status: AssertionStatus) -> Self {
        self.inner.status = status;
        self
    }

    pub fn kind(mut self, kind: AssertionKind) -> Self {
        self.inner.kind = kind;
        self
    }

    pub fn content(mut self, content: BilingualText) -> Self {
        self.inner.content = content;
        self
    }

    pub fn text(self, primary: &str) -> Self {
        self.content(BilingualText::primary(primary))
    }

    pub fn author(mut self, author: Option<&str>) -> Self {
        self.inner.author = author.map(str::to_string);
        self
    }

    pub fn canonical(mut self) -> Self {
        self.inner.is_canonical = true;
        self
    }

    pub fn verified_at(mut self, at: DateTime<Utc>) -> Self {
        self.inner.verified_at = Some(at);
        self
    }

    pub fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.inner.updated_at = at;
        self
    }

    pub fn confidence(mut self, value: f64) -> Self {
        self.inner.confidence = Some(Confidence::new(value));
        self
    }

    pub fn build(self) -> KnowledgeAssertion {
        self.inner
    }
}

/// Shorthand for the common `(source, status, kind)` combination.
pub fn assertion(
    id: &str,
    source_type: SourceType,
    status: AssertionStatus,
    kind: AssertionKind,
) -> KnowledgeAssertion {
    AssertionBuilder::new(id)
        .source(source_type)
        .status(status)
        .kind(kind)
        .build()
}

/// A table entity created a year before [`fixed_now`].
pub fn table_entity(id: &str) -> EntityDescriptor {
    EntityDescriptor {
        id: id.to_string(),
        kind: EntityKind::Table,
        path: format!("warehouse.sales.{id}"),
        data_type: None,
        description: Some(format!("Fixture table {id}")),
        parent_id: None,
        created_at: fixed_now() - chrono::Duration::days(365),
    }
}

/// A column entity under `parent` created a year before [`fixed_now`].
pub fn column_entity(id: &str, parent: &str) -> EntityDescriptor {
    EntityDescriptor {
        id: id.to_string(),
        kind: EntityKind::Column,
        path: format!("warehouse.sales.{parent}.{id}"),
        data_type: Some("numeric(12,2)".to_string()),
        description: Some(format!("Fixture column {id}")),
        parent_id: Some(parent.to_string()),
        created_at: fixed_now() - chrono::Duration::days(365),
    }
}

/// A current synthesis for `entity_id` citing `cited`.
pub fn synthesis(entity_id: &str, cited: &[&str]) -> Synthesis {
    Synthesis {
        id: format!("syn-{entity_id}"),
        entity_id: entity_id.to_string(),
        synthesis_text: "Fixture synthesis. It summarizes approved knowledge.".to_string(),
        confidence_score: Confidence::new(0.7),
        model_version: "stub-model-1".to_string(),
        cited_assertion_ids: cited.iter().map(|s| s.to_string()).collect(),
        created_at: fixed_now(),
    }
}
