use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Who or what produced an assertion.
///
/// Ordered by trust rank: `Human > Integration > Model`. The ordering is
/// derived from [`SourceType::rank`], so adding a variant forces the rank
/// table to be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Curated by a person.
    Human,
    /// Fed by an external system.
    Integration,
    /// Produced by a generative model, never human-curated.
    Model,
}

impl SourceType {
    pub const ALL: [SourceType; 3] = [Self::Human, Self::Integration, Self::Model];

    /// Trust rank used by conflict resolution.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Human => 3,
            Self::Integration => 2,
            Self::Model => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Integration => "integration",
            Self::Model => "model",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl PartialOrd for SourceType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourceType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column-level provenance channel used to badge schema columns.
///
/// Derived from the first-class [`SourceType`] field. Never inferred from
/// free-text tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProvenanceChannel {
    /// Human-authored documentation.
    Documentation,
    /// Externally-fed metadata (integrations).
    ExternalFeed,
    /// Generated content.
    Generated,
}

impl ProvenanceChannel {
    pub const fn of(source_type: SourceType) -> Self {
        match source_type {
            SourceType::Human => Self::Documentation,
            SourceType::Integration => Self::ExternalFeed,
            SourceType::Model => Self::Generated,
        }
    }
}

impl From<SourceType> for ProvenanceChannel {
    fn from(source_type: SourceType) -> Self {
        Self::of(source_type)
    }
}
