//! Entity-level aggregation of every assertion plus the current synthesis.

use std::collections::{HashMap, HashSet};

use verity_core::assertion::ProvenanceChannel;
use verity_core::models::{AggregateStatus, KnowledgeStatus, Synthesis, WinningSourceType};
use verity_core::{AssertionKind, AssertionStatus, KnowledgeAssertion, SourceType};

const MODEL_ONLY_LABEL: &str = "Model-only, unverified";
const AI_DRAFT_LABEL: &str = "Unverified, AI draft available";
const COLUMN_CONFLICT_LABEL: &str = "Conflicting column knowledge";

/// How assertions are grouped into fact slots for conflict detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlotScope {
    /// One slot per assertion kind; dissent is any other
    /// `(source_type, status)` within the kind.
    ByKind,
    /// The whole entity is one slot; dissent is any other
    /// `(channel, status)`.
    ByChannel,
}

/// Aggregate status over all assertions attached to one entity.
///
/// `curated` and `supplementary` are combined; the split only reflects how
/// callers load them. The synthesis, when present, never counts toward
/// `total_count`.
pub fn resolve_knowledge_conflict(
    curated: &[KnowledgeAssertion],
    supplementary: &[KnowledgeAssertion],
    current_synthesis: Option<&Synthesis>,
) -> AggregateStatus {
    let items: Vec<&KnowledgeAssertion> = curated.iter().chain(supplementary).collect();
    aggregate(&items, current_synthesis.is_some(), SlotScope::ByKind, &|a| a.status)
}

/// Aggregate status for one column, slotting by provenance channel.
pub fn get_column_conflict_status(
    items: &[KnowledgeAssertion],
    current_synthesis: Option<&Synthesis>,
) -> AggregateStatus {
    let items: Vec<&KnowledgeAssertion> = items.iter().collect();
    aggregate(&items, current_synthesis.is_some(), SlotScope::ByChannel, &|a| a.status)
}

/// Roll a table's own status up with the statuses of its columns.
///
/// The table is in `conflict` when it or any column is. A table with no
/// knowledge of its own but documented columns reads as `unverified`.
/// Counts are summed and the warning/deprecation flags OR-ed.
pub fn resolve_table_status(
    table_items: &[KnowledgeAssertion],
    columns: &[AggregateStatus],
    current_synthesis: Option<&Synthesis>,
) -> AggregateStatus {
    let own = resolve_knowledge_conflict(table_items, &[], current_synthesis);
    roll_up(own, columns)
}

pub(crate) fn roll_up(own: AggregateStatus, columns: &[AggregateStatus]) -> AggregateStatus {
    let mut rolled = own;
    for column in columns {
        rolled.total_count += column.total_count;
        rolled.approved_count += column.approved_count;
        rolled.has_warning |= column.has_warning;
        rolled.has_deprecation |= column.has_deprecation;
    }

    let column_conflict = columns.iter().any(|c| c.status == KnowledgeStatus::Conflict);
    let columns_documented = columns.iter().any(|c| c.status != KnowledgeStatus::Empty);

    if column_conflict && rolled.status != KnowledgeStatus::Conflict {
        rolled.status = KnowledgeStatus::Conflict;
        rolled.label = COLUMN_CONFLICT_LABEL.to_string();
    } else if rolled.status == KnowledgeStatus::Empty && columns_documented {
        rolled.status = KnowledgeStatus::Unverified;
        rolled.label = KnowledgeStatus::Unverified.default_label().to_string();
    }
    rolled
}

pub(crate) fn aggregate(
    items: &[&KnowledgeAssertion],
    synthesis_present: bool,
    scope: SlotScope,
    status_of: &dyn Fn(&KnowledgeAssertion) -> AssertionStatus,
) -> AggregateStatus {
    if items.is_empty() {
        if !synthesis_present {
            return AggregateStatus::empty();
        }
        return AggregateStatus {
            status: KnowledgeStatus::Unverified,
            winning_source_type: WinningSourceType::AiDraft,
            label: MODEL_ONLY_LABEL.to_string(),
            ..AggregateStatus::empty()
        };
    }

    // Flags read the stored status: an approved deprecation stays a
    // deprecation whatever its freshness.
    let has_kind = |kind: AssertionKind| {
        items
            .iter()
            .any(|a| a.kind == kind && a.status.is_approved())
    };
    let has_warning = has_kind(AssertionKind::Warning);
    let has_deprecation = has_kind(AssertionKind::Deprecation);

    let is_human_approved =
        |a: &KnowledgeAssertion| a.source_type == SourceType::Human && status_of(a).is_approved();
    let approved_count = items.iter().filter(|a| is_human_approved(**a)).count();

    if approved_count == 0 {
        let (winning_source_type, label) = if synthesis_present {
            (WinningSourceType::AiDraft, AI_DRAFT_LABEL)
        } else {
            (
                WinningSourceType::None,
                KnowledgeStatus::Unverified.default_label(),
            )
        };
        return AggregateStatus {
            status: KnowledgeStatus::Unverified,
            winning_source_type,
            label: label.to_string(),
            total_count: items.len(),
            approved_count: 0,
            has_warning,
            has_deprecation,
        };
    }

    let dissent = match scope {
        SlotScope::ByKind => kind_slots_disagree(items, status_of, &is_human_approved),
        SlotScope::ByChannel => {
            items
                .iter()
                .map(|a| (ProvenanceChannel::of(a.source_type), status_of(*a)))
                .collect::<HashSet<_>>()
                .len()
                > 1
        }
    };
    let status = if dissent {
        KnowledgeStatus::Conflict
    } else {
        KnowledgeStatus::Verified
    };

    AggregateStatus {
        status,
        winning_source_type: WinningSourceType::HumanApproved,
        label: status.default_label().to_string(),
        total_count: items.len(),
        approved_count,
        has_warning,
        has_deprecation,
    }
}

/// Whether any kind holding a human-approved assertion also holds a
/// different `(source_type, status)` combination.
fn kind_slots_disagree(
    items: &[&KnowledgeAssertion],
    status_of: &dyn Fn(&KnowledgeAssertion) -> AssertionStatus,
    is_human_approved: &dyn Fn(&KnowledgeAssertion) -> bool,
) -> bool {
    let mut combos: HashMap<AssertionKind, HashSet<(SourceType, AssertionStatus)>> = HashMap::new();
    let mut anchored: HashSet<AssertionKind> = HashSet::new();

    for a in items {
        combos
            .entry(a.kind)
            .or_default()
            .insert((a.source_type, status_of(*a)));
        if is_human_approved(*a) {
            anchored.insert(a.kind);
        }
    }

    anchored
        .iter()
        .any(|kind| combos.get(kind).is_some_and(|set| set.len() > 1))
}
