use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Review status of an assertion.
///
/// Ordered by rank: `Approved > Review > Draft > Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AssertionStatus {
    Draft,
    Review,
    Approved,
    Rejected,
}

impl AssertionStatus {
    pub const ALL: [AssertionStatus; 4] = [Self::Draft, Self::Review, Self::Approved, Self::Rejected];

    /// Rank used by conflict resolution.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Approved => 4,
            Self::Review => 3,
            Self::Draft => 2,
            Self::Rejected => 1,
        }
    }

    pub fn is_approved(self) -> bool {
        matches!(self, Self::Approved)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Review => "review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }
}

impl PartialOrd for AssertionStatus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AssertionStatus {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for AssertionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
