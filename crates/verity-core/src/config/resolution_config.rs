use serde::{Deserialize, Serialize};

use super::defaults;

/// Trust resolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Rank and aggregate approved assertions whose freshness has fully
    /// expired as if they were still under review.
    pub treat_expired_as_unverified: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            treat_expired_as_unverified: defaults::DEFAULT_TREAT_EXPIRED_AS_UNVERIFIED,
        }
    }
}
