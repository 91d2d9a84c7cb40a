use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Canonical status of an entity's knowledge, from least to most settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeStatus {
    /// Nothing has been asserted and no synthesis exists.
    Empty,
    /// Only unapproved input or a model synthesis exists.
    Unverified,
    /// A human-approved assertion is authoritative.
    Verified,
    /// A human-approved assertion wins, but dissenting input exists.
    Conflict,
}

impl KnowledgeStatus {
    /// Severity used when rolling children up into a parent.
    pub const fn severity(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Unverified => 1,
            Self::Verified => 2,
            Self::Conflict => 3,
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Self::Empty => "No knowledge yet",
            Self::Unverified => "Unverified",
            Self::Verified => "Verified",
            Self::Conflict => "Verified, conflicting input",
        }
    }
}

/// Which kind of source currently speaks for the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum WinningSourceType {
    HumanApproved,
    AiDraft,
    None,
}

/// Aggregate knowledge status for an entity, read by badges and tooltips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AggregateStatus {
    pub status: KnowledgeStatus,
    pub winning_source_type: WinningSourceType,
    /// Short human-readable label.
    pub label: String,
    /// Number of assertions considered (the synthesis is not counted).
    pub total_count: usize,
    /// Number of human-approved assertions.
    pub approved_count: usize,
    pub has_warning: bool,
    pub has_deprecation: bool,
}

impl AggregateStatus {
    pub fn empty() -> Self {
        Self {
            status: KnowledgeStatus::Empty,
            winning_source_type: WinningSourceType::None,
            label: KnowledgeStatus::Empty.default_label().to_string(),
            total_count: 0,
            approved_count: 0,
            has_warning: false,
            has_deprecation: false,
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self.status, KnowledgeStatus::Verified | KnowledgeStatus::Conflict)
    }
}
