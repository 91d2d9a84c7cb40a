//! Property tests: ranking invariants of conflict resolution and aggregation.

use proptest::prelude::*;
use test_fixtures::AssertionBuilder;
use verity_core::models::KnowledgeStatus;
use verity_core::{AssertionKind, AssertionStatus, KnowledgeAssertion, SourceType};
use verity_resolution::{get_column_conflict_status, resolve_conflict, resolve_knowledge_conflict};

fn source_strategy() -> impl Strategy<Value = SourceType> {
    prop::sample::select(SourceType::ALL.to_vec())
}

fn status_strategy() -> impl Strategy<Value = AssertionStatus> {
    prop::sample::select(AssertionStatus::ALL.to_vec())
}

fn kind_strategy() -> impl Strategy<Value = AssertionKind> {
    prop::sample::select(AssertionKind::ALL.to_vec())
}

fn candidates_strategy(max: usize) -> impl Strategy<Value = Vec<KnowledgeAssertion>> {
    prop::collection::vec(
        (
            source_strategy(),
            status_strategy(),
            kind_strategy(),
            prop::option::of(0.0f64..=1.0),
        ),
        1..max,
    )
    .prop_map(|rows| {
        rows
            .into_iter()
            .enumerate()
            .map(|(i, (source, status, kind, confidence))| {
                let builder = AssertionBuilder::new(&format!("a{i}"))
                    .source(source)
                    .status(status)
                    .kind(kind);
                match confidence {
                    Some(c) => builder.confidence(c).build(),
                    None => builder.build(),
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn human_approved_always_wins(
        mut others in candidates_strategy(8),
        position in 0usize..8,
    ) {
        let anchor = AssertionBuilder::new("anchor")
            .status(AssertionStatus::Approved)
            .confidence(1.0)
            .build();
        let at = position.min(others.len());
        others.insert(at, anchor);

        let result = resolve_conflict(&others).unwrap();
        prop_assert_eq!(result.winner.source_type, SourceType::Human);
        prop_assert_eq!(result.winner.status, AssertionStatus::Approved);
        prop_assert!(!result.requires_review);
    }

    #[test]
    fn winner_and_losers_partition_candidates(candidates in candidates_strategy(10)) {
        let result = resolve_conflict(&candidates).unwrap();
        prop_assert_eq!(result.losers.len() + 1, candidates.len());
        prop_assert!(candidates.contains(&result.winner));
        prop_assert!(!result.losers.contains(&result.winner));
    }

    #[test]
    fn single_candidate_never_needs_review(candidates in candidates_strategy(2)) {
        let result = resolve_conflict(&candidates).unwrap();
        prop_assert!(!result.requires_review);
        prop_assert!(result.losers.is_empty());
    }

    #[test]
    fn approvals_decide_verified_or_conflict(candidates in candidates_strategy(10)) {
        let status = resolve_knowledge_conflict(&candidates, &[], None);
        let human_approved = candidates.iter().filter(|a| a.is_human_approved()).count();
        prop_assert_eq!(status.total_count, candidates.len());
        prop_assert_eq!(status.approved_count, human_approved);
        if human_approved == 0 {
            prop_assert_eq!(status.status, KnowledgeStatus::Unverified);
        } else {
            prop_assert!(matches!(
                status.status,
                KnowledgeStatus::Verified | KnowledgeStatus::Conflict
            ));
        }
    }

    #[test]
    fn documented_column_is_never_empty(candidates in candidates_strategy(10)) {
        let column = get_column_conflict_status(&candidates, None);
        prop_assert_ne!(column.status, KnowledgeStatus::Empty);
        prop_assert!(column.approved_count <= column.total_count);
    }
}
