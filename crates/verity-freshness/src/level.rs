use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Staleness of an assertion's verification, freshest first.
///
/// The derived ordering runs `Fresh < Aging < Stale < Unverified`, so a
/// larger value always means "less trustworthy".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FreshnessLevel {
    Fresh,
    Aging,
    Stale,
    Unverified,
}

impl FreshnessLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fresh => "fresh",
            Self::Aging => "aging",
            Self::Stale => "stale",
            Self::Unverified => "unverified",
        }
    }

    /// Badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fresh => "Recently verified",
            Self::Aging => "Verification aging",
            Self::Stale => "Needs re-verification",
            Self::Unverified => "Verification expired",
        }
    }

    /// Badge color as a hex string.
    pub fn color(self) -> &'static str {
        match self {
            Self::Fresh => "#16a34a",
            Self::Aging => "#ca8a04",
            Self::Stale => "#ea580c",
            Self::Unverified => "#dc2626",
        }
    }
}

impl fmt::Display for FreshnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
