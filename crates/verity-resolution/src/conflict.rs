//! Single-slot conflict resolution.

use std::collections::HashSet;

use verity_core::models::{ResolutionReason, ResolutionResult};
use verity_core::{AssertionStatus, KnowledgeAssertion, VerityError, VerityResult};

use crate::rank::RankKey;

/// Pick the authoritative assertion among candidates for one fact slot.
///
/// Candidates are ranked by [`RankKey`], highest first. Ties on all three
/// key parts keep input order. With more than one candidate,
/// `requires_review` is set when the candidates span several source types
/// and the winner is not human-approved.
///
/// Returns `ValidationError` for an empty candidate set.
pub fn resolve_conflict(candidates: &[KnowledgeAssertion]) -> VerityResult<ResolutionResult> {
    resolve_with(candidates, &|a| a.status)
}

/// [`resolve_conflict`] with a caller-supplied effective status.
pub(crate) fn resolve_with(
    candidates: &[KnowledgeAssertion],
    status_of: &dyn Fn(&KnowledgeAssertion) -> AssertionStatus,
) -> VerityResult<ResolutionResult> {
    if candidates.is_empty() {
        return Err(VerityError::ValidationError(
            "conflict resolution needs at least one candidate".into(),
        ));
    }

    let mut ranked: Vec<(RankKey, &KnowledgeAssertion)> = candidates
        .iter()
        .map(|a| (RankKey::with_status(a, status_of(a)), a))
        .collect();
    // Stable: fully-equal keys keep their input order.
    ranked.sort_by(|(a, _), (b, _)| b.compare(a));

    let (winner_key, winner) = ranked[0];
    let losers: Vec<KnowledgeAssertion> =
        ranked[1..].iter().map(|(_, a)| (*a).clone()).collect();

    if losers.is_empty() {
        return Ok(ResolutionResult {
            winner: winner.clone(),
            losers,
            requires_review: false,
            reason: ResolutionReason::SingleCandidate,
        });
    }

    let distinct_sources = ranked
        .iter()
        .map(|(k, _)| k.source_type)
        .collect::<HashSet<_>>()
        .len();

    let (requires_review, reason) = if winner_key.is_human_approved() {
        (false, ResolutionReason::HumanApprovedOverrides)
    } else if distinct_sources > 1 {
        (true, ResolutionReason::MultiSourceDisagreement)
    } else {
        (false, ResolutionReason::HighestRankWins)
    };

    Ok(ResolutionResult {
        winner: winner.clone(),
        losers,
        requires_review,
        reason,
    })
}
