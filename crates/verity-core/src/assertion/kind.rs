use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What an assertion claims about its entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AssertionKind {
    BusinessRule,
    Warning,
    Deprecation,
    CalculationLogic,
}

impl AssertionKind {
    pub const ALL: [AssertionKind; 4] = [
        Self::BusinessRule,
        Self::Warning,
        Self::Deprecation,
        Self::CalculationLogic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::BusinessRule => "business_rule",
            Self::Warning => "warning",
            Self::Deprecation => "deprecation",
            Self::CalculationLogic => "calculation_logic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for AssertionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
