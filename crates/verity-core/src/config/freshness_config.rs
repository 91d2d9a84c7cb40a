use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::MAX_FRESHNESS_WINDOW_DAYS;
use crate::errors::{VerityError, VerityResult};

/// Freshness model configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FreshnessConfig {
    /// Days after which an unre-verified assertion is fully stale.
    pub window_days: i64,
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::DEFAULT_FRESHNESS_WINDOW_DAYS,
        }
    }
}

impl FreshnessConfig {
    /// `window_days` must lie in `1..=MAX_FRESHNESS_WINDOW_DAYS`.
    pub fn validate(&self) -> VerityResult<()> {
        if !(1..=MAX_FRESHNESS_WINDOW_DAYS).contains(&self.window_days) {
            return Err(VerityError::ConfigError(format!(
                "freshness.window_days must be in 1..={MAX_FRESHNESS_WINDOW_DAYS}, got {}",
                self.window_days
            )));
        }
        Ok(())
    }
}
