use std::sync::Arc;
use std::time::Duration;

use chrono::Duration as ChronoDuration;
use serde_json::json;
use test_fixtures::{column_entity, fixed_now, table_entity, AssertionBuilder, StubBehavior, StubGenerator};
use verity_core::config::SynthesisConfig;
use verity_core::errors::ExternalModelError;
use verity_core::models::{AuditEntry, AuditOperation, KnowledgeStatus, WinningSourceType};
use verity_core::traits::{IAuditSink, ISynthesisStore};
use verity_core::{AssertionKind, AssertionStatus, BilingualText, SourceType, VerityError, VerityResult};
use verity_resolution::TrustResolver;
use verity_storage::StorageEngine;
use verity_synthesis::SynthesisOrchestrator;

fn seeded_storage() -> Arc<StorageEngine> {
    let storage = StorageEngine::open_in_memory().unwrap();
    storage.upsert_entity(&table_entity("orders")).unwrap();
    for (id, status) in [
        ("a1", AssertionStatus::Approved),
        ("a2", AssertionStatus::Approved),
        ("a3", AssertionStatus::Draft),
    ] {
        storage
            .upsert_assertion(&AssertionBuilder::new(id).entity("orders").status(status).build())
            .unwrap();
    }
    Arc::new(storage)
}

fn orchestrator(
    storage: &Arc<StorageEngine>,
    behavior: StubBehavior,
) -> SynthesisOrchestrator<StubGenerator> {
    orchestrator_with(storage, behavior, SynthesisConfig::default())
}

fn orchestrator_with(
    storage: &Arc<StorageEngine>,
    behavior: StubBehavior,
    config: SynthesisConfig,
) -> SynthesisOrchestrator<StubGenerator> {
    SynthesisOrchestrator::with_storage(storage.clone(), StubGenerator::new(behavior), config)
        .unwrap()
}

fn citing(extra_ids: &[&str]) -> StubBehavior {
    StubBehavior::CiteContext {
        text: "Orders are net of refunds. Amounts are in cents.".to_string(),
        confidence: 0.8,
        extra_ids: extra_ids.iter().map(|s| s.to_string()).collect(),
    }
}

fn delayed(duration: Duration) -> StubBehavior {
    StubBehavior::Delay {
        duration,
        then: Box::new(citing(&[])),
    }
}

#[tokio::test]
async fn empty_context_never_calls_generator() {
    let storage = StorageEngine::open_in_memory().unwrap();
    storage.upsert_entity(&table_entity("orders")).unwrap();
    storage
        .upsert_assertion(&AssertionBuilder::new("d1").entity("orders").build())
        .unwrap();
    let storage = Arc::new(storage);
    let orch = orchestrator(&storage, citing(&[]));

    let err = orch.generate_synthesis("orders").await.unwrap_err();
    assert!(matches!(err, VerityError::EmptyContext { ref entity_id } if entity_id == "orders"));
    assert_eq!(orch.generator().calls(), 0);
    assert!(orch.current_synthesis("orders").unwrap().is_none());
    assert_eq!(orch.metrics().snapshot().empty_context, 1);
}

#[tokio::test]
async fn unknown_entity_is_reported() {
    let storage = seeded_storage();
    let orch = orchestrator(&storage, citing(&[]));
    let err = orch.generate_synthesis("missing").await.unwrap_err();
    assert!(matches!(err, VerityError::EntityNotFound { .. }));
    assert_eq!(orch.generator().calls(), 0);
}

#[tokio::test]
async fn zero_context_bound_is_rejected_before_any_generation() {
    let storage = seeded_storage();
    for config in [
        SynthesisConfig {
            max_context_assertions: 0,
            ..SynthesisConfig::default()
        },
        SynthesisConfig {
            generation_timeout_secs: 0,
            ..SynthesisConfig::default()
        },
    ] {
        let result = SynthesisOrchestrator::with_storage(
            storage.clone(),
            StubGenerator::new(citing(&[])),
            config,
        );
        assert!(matches!(result, Err(VerityError::ConfigError(_))));
    }
    assert!(storage.current("orders").unwrap().is_none());
}

#[tokio::test]
async fn exhausted_token_budget_still_sends_one_assertion() {
    let storage = seeded_storage();
    let config = SynthesisConfig {
        max_context_tokens: 1,
        ..SynthesisConfig::default()
    };
    let orch = orchestrator_with(&storage, citing(&[]), config);

    let synthesis = orch.generate_synthesis("orders").await.unwrap();
    let request = orch.generator().last_request().unwrap();
    assert_eq!(request.assertions.len(), 1);
    assert_eq!(synthesis.citation_count(), 1);
    assert_eq!(orch.generator().calls(), 1);
}

#[tokio::test]
async fn synthesis_is_persisted_from_approved_context_only() {
    let storage = seeded_storage();
    let orch = orchestrator(&storage, citing(&[]));

    let synthesis = orch.generate_synthesis("orders").await.unwrap();
    assert_eq!(synthesis.model_version, "stub-model-1");
    assert_eq!(synthesis.confidence_score.value(), 0.8);
    assert_eq!(
        synthesis.cited_assertion_ids.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["a1", "a2"]
    );

    let request = orch.generator().last_request().unwrap();
    let context_ids: Vec<&str> = request.citable_ids().collect();
    assert!(!context_ids.contains(&"a3"));
    assert!(request.prompt.contains("warehouse.sales.orders"));

    assert_eq!(orch.current_synthesis("orders").unwrap(), Some(synthesis.clone()));

    let audit = storage.query_by_entity("orders").unwrap();
    assert_eq!(audit.len(), 1);
    assert_eq!(audit[0].operation, AuditOperation::SynthesisGenerated);
    assert_eq!(audit[0].details["synthesis_id"], synthesis.id.as_str());
    assert_eq!(audit[0].details["citation_count"], 2);
    assert_eq!(audit[0].details["dropped_citation_count"], 0);
    assert_eq!(audit[0].details["model_version"], "stub-model-1");
    assert_eq!(audit[0].details["context_hash"].as_str().map(str::len), Some(64));
}

#[tokio::test]
async fn fabricated_and_draft_citations_are_dropped() {
    let storage = seeded_storage();
    let orch = orchestrator(&storage, citing(&["ghost", "a3"]));

    let synthesis = orch.generate_synthesis("orders").await.unwrap();
    assert!(!synthesis.cites("ghost"));
    assert!(!synthesis.cites("a3"));
    assert_eq!(synthesis.citation_count(), 2);

    let stored = storage.current("orders").unwrap().unwrap();
    assert_eq!(stored.cited_assertion_ids, synthesis.cited_assertion_ids);
    assert_eq!(storage.query_by_entity("orders").unwrap()[0].details["dropped_citation_count"], 2);
    assert_eq!(orch.metrics().snapshot().citations_dropped, 2);
}

#[tokio::test]
async fn schema_violation_persists_nothing() {
    let storage = seeded_storage();
    let orch = orchestrator(
        &storage,
        StubBehavior::Respond(json!({ "synthesisText": "Only text." })),
    );

    let err = orch.generate_synthesis("orders").await.unwrap_err();
    assert!(matches!(
        err,
        VerityError::ExternalModel(ExternalModelError::SchemaViolation { .. })
    ));
    assert!(storage.current("orders").unwrap().is_none());
    assert!(storage.query_by_entity("orders").unwrap().is_empty());
    assert_eq!(orch.metrics().snapshot().failed, 1);
}

#[tokio::test]
async fn transport_failure_keeps_prior_synthesis() {
    let storage = seeded_storage();
    let prior = orchestrator(&storage, citing(&[]))
        .generate_synthesis("orders")
        .await
        .unwrap();

    let failing = orchestrator(&storage, StubBehavior::Fail("connection reset".into()));
    let err = failing.generate_synthesis("orders").await.unwrap_err();
    assert!(err.is_external_model());
    assert_eq!(failing.generator().calls(), 1);
    assert_eq!(storage.current("orders").unwrap().unwrap().id, prior.id);
}

#[tokio::test]
async fn regeneration_leaves_exactly_one_current() {
    let storage = seeded_storage();
    let orch = orchestrator(&storage, citing(&[]));

    let first = orch.generate_synthesis("orders").await.unwrap();
    let second = orch.generate_synthesis("orders").await.unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(storage.synthesis_count("orders").unwrap(), 1);
    assert_eq!(storage.current("orders").unwrap().unwrap().id, second.id);
    assert_eq!(storage.query_by_entity("orders").unwrap().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn slow_generator_times_out() {
    let storage = seeded_storage();
    let config = SynthesisConfig {
        generation_timeout_secs: 5,
        ..SynthesisConfig::default()
    };
    let orch = orchestrator_with(&storage, delayed(Duration::from_secs(30)), config);

    let err = orch.generate_synthesis("orders").await.unwrap_err();
    assert!(matches!(
        err,
        VerityError::ExternalModel(ExternalModelError::Timeout { secs: 5 })
    ));
    assert!(storage.current("orders").unwrap().is_none());
}

#[tokio::test(start_paused = true)]
async fn cancelled_regeneration_writes_nothing() {
    let storage = seeded_storage();
    let prior = orchestrator(&storage, citing(&[]))
        .generate_synthesis("orders")
        .await
        .unwrap();

    let slow = orchestrator(&storage, delayed(Duration::from_secs(30)));
    let outcome =
        tokio::time::timeout(Duration::from_secs(1), slow.generate_synthesis("orders")).await;
    assert!(outcome.is_err());
    assert_eq!(slow.generator().calls(), 1);

    assert_eq!(storage.current("orders").unwrap().unwrap().id, prior.id);
    assert_eq!(storage.query_by_entity("orders").unwrap().len(), 1);
    assert!(!slow.generator().last_request().unwrap().assertions.is_empty());
}

#[tokio::test(start_paused = true)]
async fn concurrent_regenerations_serialize() {
    let storage = seeded_storage();
    let orch = orchestrator(&storage, delayed(Duration::from_millis(50)));

    let (a, b) = tokio::join!(
        orch.generate_synthesis("orders"),
        orch.generate_synthesis("orders")
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(storage.synthesis_count("orders").unwrap(), 1);
    let current = storage.current("orders").unwrap().unwrap();
    assert!(current.id == a.id || current.id == b.id);
    assert_eq!(storage.query_by_entity("orders").unwrap().len(), 2);
}

#[tokio::test]
async fn context_prefers_canonical_then_recent() {
    let storage = StorageEngine::open_in_memory().unwrap();
    storage.upsert_entity(&table_entity("orders")).unwrap();
    let approved = |id: &str, days_ago: i64| {
        AssertionBuilder::new(id)
            .entity("orders")
            .status(AssertionStatus::Approved)
            .updated_at(fixed_now() - ChronoDuration::days(days_ago))
    };
    storage.upsert_assertion(&approved("old-canonical", 300).canonical().build()).unwrap();
    storage.upsert_assertion(&approved("middle", 50).build()).unwrap();
    storage.upsert_assertion(&approved("newest", 1).build()).unwrap();
    let storage = Arc::new(storage);

    let config = SynthesisConfig {
        max_context_assertions: 2,
        ..SynthesisConfig::default()
    };
    let orch = orchestrator_with(&storage, citing(&[]), config);
    let synthesis = orch.generate_synthesis("orders").await.unwrap();

    let request = orch.generator().last_request().unwrap();
    let ids: Vec<&str> = request.citable_ids().collect();
    assert_eq!(ids, vec!["old-canonical", "newest"]);
    assert!(!synthesis.cites("middle"));
}

#[tokio::test]
async fn long_content_is_truncated() {
    let storage = StorageEngine::open_in_memory().unwrap();
    storage.upsert_entity(&table_entity("orders")).unwrap();
    storage
        .upsert_assertion(
            &AssertionBuilder::new("long")
                .entity("orders")
                .status(AssertionStatus::Approved)
                .content(BilingualText::both("x".repeat(500), "y".repeat(20)))
                .build(),
        )
        .unwrap();
    let storage = Arc::new(storage);

    let config = SynthesisConfig {
        max_content_chars: 40,
        ..SynthesisConfig::default()
    };
    let orch = orchestrator_with(&storage, citing(&[]), config);
    orch.generate_synthesis("orders").await.unwrap();

    let request = orch.generator().last_request().unwrap();
    let content = &request.assertions[0].content;
    assert_eq!(content.primary.as_deref().map(str::len), Some(40));
    assert_eq!(content.secondary.as_deref().map(str::len), Some(20));
}

struct FailingAudit;

impl IAuditSink for FailingAudit {
    fn append(&self, _entry: &AuditEntry) -> VerityResult<()> {
        Err(VerityError::ConcurrencyError("audit unavailable".into()))
    }

    fn query_by_entity(&self, _entity_id: &str) -> VerityResult<Vec<AuditEntry>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn audit_failure_does_not_fail_generation() {
    let storage = seeded_storage();
    let orch = SynthesisOrchestrator::new(
        storage.clone(),
        storage.clone(),
        Arc::new(FailingAudit),
        StubGenerator::citing_context(),
        SynthesisConfig::default(),
    )
    .unwrap();

    let synthesis = orch.generate_synthesis("orders").await.unwrap();
    assert_eq!(storage.current("orders").unwrap().unwrap().id, synthesis.id);
    assert_eq!(orch.metrics().snapshot().generated, 1);
}

#[tokio::test]
async fn knowledge_status_reflects_storage_and_synthesis() {
    let storage = StorageEngine::open_in_memory().unwrap();
    storage.upsert_entity(&table_entity("orders")).unwrap();
    storage.upsert_entity(&column_entity("amount", "orders")).unwrap();
    storage
        .upsert_assertion(
            &AssertionBuilder::new("t1")
                .entity("orders")
                .status(AssertionStatus::Approved)
                .build(),
        )
        .unwrap();
    storage
        .upsert_assertion(
            &AssertionBuilder::new("t2")
                .entity("orders")
                .source(SourceType::Integration)
                .kind(AssertionKind::BusinessRule)
                .build(),
        )
        .unwrap();
    storage
        .upsert_assertion(
            &AssertionBuilder::new("c1")
                .entity("amount")
                .source(SourceType::Model)
                .status(AssertionStatus::Approved)
                .build(),
        )
        .unwrap();
    let storage = Arc::new(storage);
    let orch = orchestrator(&storage, citing(&[]));
    let resolver = TrustResolver::default();

    let table = orch.knowledge_status("orders", &resolver).unwrap();
    assert_eq!(table.status, KnowledgeStatus::Conflict);
    assert_eq!(table.winning_source_type, WinningSourceType::HumanApproved);

    let column = orch.knowledge_status("amount", &resolver).unwrap();
    assert_eq!(column.status, KnowledgeStatus::Unverified);
    assert_eq!(column.winning_source_type, WinningSourceType::None);

    orch.generate_synthesis("amount").await.unwrap();
    let column = orch.knowledge_status("amount", &resolver).unwrap();
    assert_eq!(column.winning_source_type, WinningSourceType::AiDraft);
    assert_eq!(column.total_count, 1);
}
