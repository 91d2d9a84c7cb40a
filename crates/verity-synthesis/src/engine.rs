//! SynthesisOrchestrator: regenerates an entity's synthesis and reads
//! aggregate knowledge status through the storage-side traits.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::Instrument;

use verity_core::config::SynthesisConfig;
use verity_core::errors::ExternalModelError;
use verity_core::models::{
    AggregateStatus, AuditActor, AuditEntry, AuditOperation, EntityDescriptor, EntityKind,
    KnowledgeStatus, Synthesis,
};
use verity_core::traits::{IAssertionSource, IAuditSink, ISynthesisGenerator, ISynthesisStore};
use verity_core::{SourceType, VerityError, VerityResult};
use verity_observability::{events, synthesis_span, resolution_span, SynthesisMetrics};
use verity_resolution::TrustResolver;

use crate::citations::filter_citations;
use crate::context::{ContextBuilder, GenerationContext, TokenCounter};
use crate::contract::parse_response;
use crate::locks::EntityLocks;

/// Orchestrates synthesis regeneration for one generator.
///
/// Same-entity regenerations are serialized; different entities proceed
/// concurrently. Dropping a `generate_synthesis` future before it reaches
/// the replace step writes nothing.
pub struct SynthesisOrchestrator<G: ISynthesisGenerator> {
    source: Arc<dyn IAssertionSource>,
    store: Arc<dyn ISynthesisStore>,
    audit: Arc<dyn IAuditSink>,
    generator: G,
    config: SynthesisConfig,
    counter: TokenCounter,
    locks: EntityLocks,
    metrics: SynthesisMetrics,
}

impl<G: ISynthesisGenerator> SynthesisOrchestrator<G> {
    /// Create an orchestrator over separate collaborators. The config is
    /// validated first.
    pub fn new(
        source: Arc<dyn IAssertionSource>,
        store: Arc<dyn ISynthesisStore>,
        audit: Arc<dyn IAuditSink>,
        generator: G,
        config: SynthesisConfig,
    ) -> VerityResult<Self> {
        config.validate()?;
        let counter = TokenCounter::new(config.token_cache_capacity)?;
        Ok(Self {
            source,
            store,
            audit,
            generator,
            config,
            counter,
            locks: EntityLocks::new(),
            metrics: SynthesisMetrics::new(),
        })
    }

    /// Create an orchestrator over one backend implementing all three
    /// storage-side traits.
    pub fn with_storage<S>(storage: Arc<S>, generator: G, config: SynthesisConfig) -> VerityResult<Self>
    where
        S: IAssertionSource + ISynthesisStore + IAuditSink + 'static,
    {
        Self::new(
            storage.clone(),
            storage.clone(),
            storage,
            generator,
            config,
        )
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn metrics(&self) -> &SynthesisMetrics {
        &self.metrics
    }

    /// The entity's current synthesis, if any.
    pub fn current_synthesis(&self, entity_id: &str) -> VerityResult<Option<Synthesis>> {
        self.store.current(entity_id)
    }

    /// Regenerate the entity's synthesis from its approved assertions.
    ///
    /// Errors: `EntityNotFound`, `EmptyContext` (the generator is not
    /// called), `ExternalModel` for timeout, transport, or contract
    /// failures (nothing is persisted), and storage errors from the
    /// replace. A failed audit append after a committed replace is logged
    /// and not returned.
    pub async fn generate_synthesis(&self, entity_id: &str) -> VerityResult<Synthesis> {
        let span = synthesis_span!(entity_id, self.generator.model_version());
        async {
            let _guard = self.locks.acquire(entity_id).await;

            let entity = self.load_entity(entity_id)?;
            let approved = self.source.approved_assertions(entity_id)?;
            if approved.is_empty() {
                self.metrics.record_empty_context();
                return Err(VerityError::EmptyContext {
                    entity_id: entity_id.to_string(),
                });
            }

            let context = ContextBuilder::new(&self.config, &self.counter).build(&entity, approved);
            if context.request.assertions.is_empty() {
                self.metrics.record_empty_context();
                return Err(VerityError::EmptyContext {
                    entity_id: entity_id.to_string(),
                });
            }
            tracing::debug!(
                assertions = context.request.assertions.len(),
                omitted = context.omitted,
                tokens = context.context_tokens,
                "generation context built"
            );

            match self.generate_and_replace(entity_id, &context).await {
                Ok(synthesis) => Ok(synthesis),
                Err(e) => {
                    self.metrics.record_failed();
                    events::generation_failed(entity_id, &e.to_string());
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn generate_and_replace(
        &self,
        entity_id: &str,
        context: &GenerationContext,
    ) -> VerityResult<Synthesis> {
        let secs = self.config.generation_timeout_secs;
        let raw = tokio::time::timeout(
            Duration::from_secs(secs),
            self.generator.generate(&context.request),
        )
        .await
        .map_err(|_| ExternalModelError::Timeout { secs })??;
        let payload = parse_response(raw)?;

        let citations = filter_citations(payload.cited_assertion_ids, context.request.citable_ids());
        if !citations.dropped.is_empty() {
            events::citations_dropped(entity_id, &citations.dropped);
        }

        let synthesis = Synthesis {
            id: uuid::Uuid::new_v4().to_string(),
            entity_id: entity_id.to_string(),
            synthesis_text: payload.synthesis_text,
            confidence_score: payload.confidence,
            model_version: self.generator.model_version().to_string(),
            cited_assertion_ids: citations.kept,
            created_at: Utc::now(),
        };
        self.store.replace_current(&synthesis)?;

        let entry = AuditEntry {
            entity_id: entity_id.to_string(),
            operation: AuditOperation::SynthesisGenerated,
            details: serde_json::json!({
                "synthesis_id": synthesis.id,
                "confidence": synthesis.confidence_score.value(),
                "citation_count": synthesis.citation_count(),
                "model_version": synthesis.model_version,
                "dropped_citation_count": citations.dropped.len(),
                "context_assertions": context.request.assertions.len(),
                "context_hash": context.context_hash,
            }),
            actor: AuditActor::Orchestrator,
            timestamp: synthesis.created_at,
        };
        if let Err(e) = self.audit.append(&entry) {
            events::audit_append_failed(entity_id, &e.to_string());
        }

        self.metrics.record_generated(citations.dropped.len());
        events::synthesis_generated(
            entity_id,
            &synthesis.id,
            synthesis.confidence_score.value(),
            synthesis.citation_count(),
            &synthesis.model_version,
        );
        Ok(synthesis)
    }

    /// Aggregate knowledge status for an entity as the presentation layer
    /// shows it, including the current synthesis.
    ///
    /// Columns are slotted by provenance channel; tables by assertion kind.
    /// Human-authored assertions are the curated set, everything else is
    /// supplementary.
    pub fn knowledge_status(
        &self,
        entity_id: &str,
        resolver: &TrustResolver,
    ) -> VerityResult<AggregateStatus> {
        let entity = self.load_entity(entity_id)?;
        let assertions = self.source.assertions(entity_id)?;
        let _span = resolution_span!(entity_id, assertions.len()).entered();

        let current = self.store.current(entity_id)?;
        let now = Utc::now();
        let status = match entity.kind {
            EntityKind::Column => resolver.column_status_at(&assertions, current.as_ref(), now),
            EntityKind::Table => {
                let (curated, supplementary): (Vec<_>, Vec<_>) = assertions
                    .into_iter()
                    .partition(|a| a.source_type == SourceType::Human);
                resolver.knowledge_status_at(&curated, &supplementary, current.as_ref(), now)
            }
        };

        if status.status == KnowledgeStatus::Conflict {
            events::conflict_detected(entity_id, status.total_count, status.approved_count);
        }
        Ok(status)
    }

    fn load_entity(&self, entity_id: &str) -> VerityResult<EntityDescriptor> {
        self.source
            .entity(entity_id)?
            .ok_or_else(|| VerityError::EntityNotFound {
                id: entity_id.to_string(),
            })
    }
}
