use std::cmp::Ordering;

use verity_core::{AssertionStatus, Confidence, KnowledgeAssertion, SourceType};

/// The three-part ordering key for conflict resolution.
///
/// Compared lexicographically: source rank, then status rank, then
/// confidence. Two keys compare `Equal` only when all three parts match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankKey {
    pub source_type: SourceType,
    pub status: AssertionStatus,
    pub confidence: Confidence,
}

impl RankKey {
    pub fn of(assertion: &KnowledgeAssertion) -> Self {
        Self::with_status(assertion, assertion.status)
    }

    /// Key for `assertion` ranked as if its status were `status`.
    pub fn with_status(assertion: &KnowledgeAssertion, status: AssertionStatus) -> Self {
        Self {
            source_type: assertion.source_type,
            status,
            confidence: assertion.ranking_confidence(),
        }
    }

    pub fn is_human_approved(&self) -> bool {
        self.source_type == SourceType::Human && self.status == AssertionStatus::Approved
    }

    /// Ascending comparison. Sort with `b.compare(a)` for highest-first.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.source_type
            .cmp(&other.source_type)
            .then(self.status.cmp(&other.status))
            .then(self.confidence.total_cmp(&other.confidence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verity_core::{AssertionKind, BilingualText};

    fn key(source_type: SourceType, status: AssertionStatus, confidence: f64) -> RankKey {
        RankKey {
            source_type,
            status,
            confidence: Confidence::new(confidence),
        }
    }

    #[test]
    fn source_dominates_status() {
        let human_draft = key(SourceType::Human, AssertionStatus::Draft, 0.0);
        let integration_approved = key(SourceType::Integration, AssertionStatus::Approved, 1.0);
        assert_eq!(human_draft.compare(&integration_approved), Ordering::Greater);
    }

    #[test]
    fn status_dominates_confidence() {
        let review = key(SourceType::Model, AssertionStatus::Review, 0.1);
        let draft = key(SourceType::Model, AssertionStatus::Draft, 0.99);
        assert_eq!(review.compare(&draft), Ordering::Greater);
    }

    #[test]
    fn confidence_breaks_remaining_ties() {
        let high = key(SourceType::Model, AssertionStatus::Draft, 0.9);
        let low = key(SourceType::Model, AssertionStatus::Draft, 0.2);
        assert_eq!(high.compare(&low), Ordering::Greater);
        assert_eq!(low.compare(&low), Ordering::Equal);
    }

    #[test]
    fn missing_confidence_ranks_as_zero() {
        let a = KnowledgeAssertion {
            id: "a".into(),
            entity_id: "e".into(),
            source_type: SourceType::Model,
            status: AssertionStatus::Draft,
            kind: AssertionKind::Warning,
            content: BilingualText::primary("x"),
            author: None,
            is_canonical: false,
            verified_at: None,
            updated_at: chrono::Utc::now(),
            confidence: None,
        };
        assert_eq!(RankKey::of(&a).confidence, Confidence::ZERO);
    }
}
