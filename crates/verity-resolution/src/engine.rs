use chrono::{DateTime, Utc};

use verity_core::config::{ResolutionConfig, VerityConfig};
use verity_core::models::{AggregateStatus, ResolutionResult, Synthesis};
use verity_core::{AssertionStatus, KnowledgeAssertion, VerityResult};
use verity_freshness::FreshnessModel;

use crate::aggregate::{self, SlotScope};
use crate::conflict;

/// Configured trust resolver.
///
/// With the default configuration every method matches the free functions
/// of this crate. With `treat_expired_as_unverified`, an approved assertion
/// whose freshness level is `unverified` at `now` is ranked and aggregated
/// as if it were still under review.
#[derive(Debug, Clone)]
pub struct TrustResolver {
    config: ResolutionConfig,
    freshness: FreshnessModel,
}

impl TrustResolver {
    pub fn new(config: ResolutionConfig, freshness: FreshnessModel) -> Self {
        Self { config, freshness }
    }

    pub fn from_config(config: &VerityConfig) -> Self {
        Self::new(
            config.resolution.clone(),
            FreshnessModel::from_config(&config.freshness),
        )
    }

    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    pub fn freshness(&self) -> &FreshnessModel {
        &self.freshness
    }

    /// Status the resolver ranks `assertion` by at `now`.
    pub fn effective_status(
        &self,
        assertion: &KnowledgeAssertion,
        now: DateTime<Utc>,
    ) -> AssertionStatus {
        if self.config.treat_expired_as_unverified
            && assertion.status.is_approved()
            && self.freshness.is_expired(assertion, now)
        {
            AssertionStatus::Review
        } else {
            assertion.status
        }
    }

    pub fn resolve_conflict(
        &self,
        candidates: &[KnowledgeAssertion],
    ) -> VerityResult<ResolutionResult> {
        self.resolve_conflict_at(candidates, Utc::now())
    }

    pub fn resolve_conflict_at(
        &self,
        candidates: &[KnowledgeAssertion],
        now: DateTime<Utc>,
    ) -> VerityResult<ResolutionResult> {
        conflict::resolve_with(candidates, &|a| self.effective_status(a, now))
    }

    pub fn knowledge_status(
        &self,
        curated: &[KnowledgeAssertion],
        supplementary: &[KnowledgeAssertion],
        current_synthesis: Option<&Synthesis>,
    ) -> AggregateStatus {
        self.knowledge_status_at(curated, supplementary, current_synthesis, Utc::now())
    }

    pub fn knowledge_status_at(
        &self,
        curated: &[KnowledgeAssertion],
        supplementary: &[KnowledgeAssertion],
        current_synthesis: Option<&Synthesis>,
        now: DateTime<Utc>,
    ) -> AggregateStatus {
        let items: Vec<&KnowledgeAssertion> = curated.iter().chain(supplementary).collect();
        aggregate::aggregate(
            &items,
            current_synthesis.is_some(),
            SlotScope::ByKind,
            &|a| self.effective_status(a, now),
        )
    }

    pub fn column_status(
        &self,
        items: &[KnowledgeAssertion],
        current_synthesis: Option<&Synthesis>,
    ) -> AggregateStatus {
        self.column_status_at(items, current_synthesis, Utc::now())
    }

    pub fn column_status_at(
        &self,
        items: &[KnowledgeAssertion],
        current_synthesis: Option<&Synthesis>,
        now: DateTime<Utc>,
    ) -> AggregateStatus {
        let items: Vec<&KnowledgeAssertion> = items.iter().collect();
        aggregate::aggregate(
            &items,
            current_synthesis.is_some(),
            SlotScope::ByChannel,
            &|a| self.effective_status(a, now),
        )
    }

    pub fn table_status_at(
        &self,
        table_items: &[KnowledgeAssertion],
        columns: &[AggregateStatus],
        current_synthesis: Option<&Synthesis>,
        now: DateTime<Utc>,
    ) -> AggregateStatus {
        let own = self.knowledge_status_at(table_items, &[], current_synthesis, now);
        aggregate::roll_up(own, columns)
    }
}

impl Default for TrustResolver {
    fn default() -> Self {
        Self::new(ResolutionConfig::default(), FreshnessModel::default())
    }
}
