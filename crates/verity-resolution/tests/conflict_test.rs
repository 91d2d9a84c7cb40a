use test_fixtures::{assertion, AssertionBuilder};
use verity_core::models::ResolutionReason;
use verity_core::{AssertionKind, AssertionStatus, SourceType, VerityError};
use verity_resolution::resolve_conflict;

use AssertionKind::BusinessRule;
use AssertionStatus::*;
use SourceType::*;

#[test]
fn single_candidate_wins_without_review() {
    let only = assertion("a1", Model, Draft, BusinessRule);
    let result = resolve_conflict(std::slice::from_ref(&only)).unwrap();
    assert_eq!(result.winner, only);
    assert!(result.losers.is_empty());
    assert!(!result.requires_review);
    assert_eq!(result.reason, ResolutionReason::SingleCandidate);
}

#[test]
fn empty_candidate_set_is_a_validation_error() {
    let err = resolve_conflict(&[]).unwrap_err();
    assert!(matches!(err, VerityError::ValidationError(_)));
}

#[test]
fn human_approved_overrides_other_channels() {
    let candidates = vec![
        assertion("model", Model, Approved, BusinessRule),
        assertion("feed", Integration, Approved, BusinessRule),
        assertion("curator", Human, Approved, BusinessRule),
    ];
    let result = resolve_conflict(&candidates).unwrap();
    assert_eq!(result.winner.id, "curator");
    assert!(!result.requires_review);
    assert_eq!(result.reason, ResolutionReason::HumanApprovedOverrides);
    assert_eq!(result.reason.as_str(), "human_approved_overrides");
    let loser_ids: Vec<&str> = result.losers.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(loser_ids, vec!["feed", "model"]);
}

#[test]
fn human_draft_beats_integration_but_needs_review() {
    let candidates = vec![
        assertion("feed", Integration, Approved, BusinessRule),
        assertion("curator", Human, Draft, BusinessRule),
    ];
    let result = resolve_conflict(&candidates).unwrap();
    assert_eq!(result.winner.id, "curator");
    assert!(result.requires_review);
    assert_eq!(result.reason, ResolutionReason::MultiSourceDisagreement);
}

#[test]
fn same_channel_resolves_by_status_without_review() {
    let candidates = vec![
        assertion("draft", Integration, Draft, BusinessRule),
        assertion("review", Integration, Review, BusinessRule),
        assertion("rejected", Integration, Rejected, BusinessRule),
    ];
    let result = resolve_conflict(&candidates).unwrap();
    assert_eq!(result.winner.id, "review");
    assert!(!result.requires_review);
    assert_eq!(result.reason, ResolutionReason::HighestRankWins);
}

#[test]
fn confidence_breaks_ties_between_model_drafts() {
    let candidates = vec![
        AssertionBuilder::new("low").source(Model).confidence(0.3).build(),
        AssertionBuilder::new("none").source(Model).build(),
        AssertionBuilder::new("high").source(Model).confidence(0.9).build(),
    ];
    let result = resolve_conflict(&candidates).unwrap();
    assert_eq!(result.winner.id, "high");
    assert_eq!(result.losers[0].id, "low");
    assert_eq!(result.losers[1].id, "none");
}

#[test]
fn fully_equal_keys_keep_input_order() {
    let candidates = vec![
        assertion("first", Human, Review, BusinessRule),
        assertion("second", Human, Review, BusinessRule),
    ];
    let result = resolve_conflict(&candidates).unwrap();
    assert_eq!(result.winner.id, "first");
    assert_eq!(result.losers[0].id, "second");
}

#[test]
fn rejected_human_still_outranks_other_channels() {
    let candidates = vec![
        assertion("feed", Integration, Approved, BusinessRule),
        assertion("curator", Human, Rejected, BusinessRule),
    ];
    let result = resolve_conflict(&candidates).unwrap();
    assert_eq!(result.winner.id, "curator");
    assert!(result.requires_review);
}
