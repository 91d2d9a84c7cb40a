use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::assertion::KnowledgeAssertion;

/// Why a resolution came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionReason {
    /// Only one candidate was supplied.
    SingleCandidate,
    /// A human-approved assertion wins outright.
    HumanApprovedOverrides,
    /// Candidates from several provenance channels disagree; an owner must
    /// adjudicate.
    MultiSourceDisagreement,
    /// All candidates share a channel; the highest-ranked one wins.
    HighestRankWins,
}

impl ResolutionReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleCandidate => "single_candidate",
            Self::HumanApprovedOverrides => "human_approved_overrides",
            Self::MultiSourceDisagreement => "multi_source_disagreement",
            Self::HighestRankWins => "highest_rank_wins",
        }
    }
}

/// Outcome of resolving one fact slot. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolutionResult {
    pub winner: KnowledgeAssertion,
    /// Remaining candidates, highest rank first.
    pub losers: Vec<KnowledgeAssertion>,
    pub requires_review: bool,
    pub reason: ResolutionReason,
}
