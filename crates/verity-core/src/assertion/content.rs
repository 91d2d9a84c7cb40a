use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Bilingual text payload. At least one language must be populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BilingualText {
    /// Organization's primary language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Secondary language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

impl BilingualText {
    pub fn primary(text: impl Into<String>) -> Self {
        Self {
            primary: Some(text.into()),
            secondary: None,
        }
    }

    pub fn both(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: Some(primary.into()),
            secondary: Some(secondary.into()),
        }
    }

    /// Whether at least one language carries non-blank text.
    pub fn is_populated(&self) -> bool {
        [&self.primary, &self.secondary]
            .into_iter()
            .flatten()
            .any(|s| !s.trim().is_empty())
    }

    /// The primary text when present, otherwise the secondary.
    pub fn preferred(&self) -> Option<&str> {
        self.primary
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or_else(|| self.secondary.as_deref().filter(|s| !s.trim().is_empty()))
    }
}
