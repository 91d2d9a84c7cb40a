use test_fixtures::{fixed_now, table_entity, AssertionBuilder};
use verity_core::models::{AuditActor, AuditEntry, AuditOperation};
use verity_core::traits::{IAssertionSource, IAuditSink};
use verity_core::{AssertionStatus, VerityError};
use verity_storage::StorageEngine;

fn storage() -> StorageEngine {
    let storage = StorageEngine::open_in_memory().unwrap();
    storage.upsert_entity(&table_entity("orders")).unwrap();
    storage
        .upsert_assertion(&AssertionBuilder::new("a1").entity("orders").build())
        .unwrap();
    storage
}

#[test]
fn appended_entries_are_returned_oldest_first() {
    let storage = storage();
    for confidence in [0.4, 0.8] {
        storage
            .append(&AuditEntry {
                entity_id: "orders".to_string(),
                operation: AuditOperation::SynthesisGenerated,
                details: serde_json::json!({ "confidence": confidence }),
                actor: AuditActor::Orchestrator,
                timestamp: fixed_now(),
            })
            .unwrap();
    }

    let entries = storage.query_by_entity("orders").unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].details["confidence"], 0.4);
    assert_eq!(entries[1].details["confidence"], 0.8);
    assert_eq!(entries[0].actor, AuditActor::Orchestrator);
    assert_eq!(entries[0].timestamp, fixed_now());
    assert!(storage.query_by_entity("customers").unwrap().is_empty());
}

#[test]
fn status_change_updates_row_and_audits() {
    let storage = storage();
    storage
        .update_assertion_status("a1", AssertionStatus::Approved, AuditActor::User, fixed_now())
        .unwrap();

    assert_eq!(storage.approved_assertions("orders").unwrap().len(), 1);
    let entries = storage.query_by_entity("orders").unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].operation, AuditOperation::StatusChanged);
    assert_eq!(entries[0].details["from"], "draft");
    assert_eq!(entries[0].details["to"], "approved");
    assert_eq!(entries[0].details["assertion_id"], "a1");
}

#[test]
fn reverification_sets_verified_at_and_audits() {
    let storage = storage();
    storage.mark_verified("a1", AuditActor::User, fixed_now()).unwrap();

    let loaded = storage.get_assertion("a1").unwrap().unwrap();
    assert_eq!(loaded.verified_at, Some(fixed_now()));
    let entries = storage.query_by_entity("orders").unwrap();
    assert_eq!(entries[0].operation, AuditOperation::Reverified);
}

#[test]
fn unknown_assertion_cannot_change_status() {
    let storage = storage();
    assert!(storage
        .update_assertion_status("nope", AssertionStatus::Approved, AuditActor::User, fixed_now())
        .is_err());
    assert!(storage.query_by_entity("orders").unwrap().is_empty());
}

#[test]
fn reverification_in_the_future_is_rejected() {
    let storage = storage();
    let future = chrono::Utc::now() + chrono::Duration::days(3650);

    let err = storage.mark_verified("a1", AuditActor::User, future).unwrap_err();
    assert!(matches!(err, VerityError::ValidationError(_)));
    let loaded = storage.get_assertion("a1").unwrap().unwrap();
    assert_eq!(loaded.verified_at, None);
    assert!(storage.query_by_entity("orders").unwrap().is_empty());
}

#[test]
fn reverification_before_entity_creation_is_rejected() {
    let storage = storage();
    let before_creation = table_entity("orders").created_at - chrono::Duration::days(1);

    let err = storage
        .mark_verified("a1", AuditActor::User, before_creation)
        .unwrap_err();
    assert!(matches!(err, VerityError::ValidationError(_)));
    let loaded = storage.get_assertion("a1").unwrap().unwrap();
    assert!(loaded.validate(chrono::Utc::now()).is_ok());
    assert_eq!(loaded.verified_at, None);
    assert!(storage.query_by_entity("orders").unwrap().is_empty());
}

#[test]
fn unknown_assertion_cannot_be_reverified() {
    let storage = storage();
    assert!(storage
        .mark_verified("nope", AuditActor::User, fixed_now())
        .is_err());
    assert!(storage.query_by_entity("orders").unwrap().is_empty());
}
