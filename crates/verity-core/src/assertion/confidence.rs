use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use ts_rs::TS;

use crate::errors::VerityError;

/// Confidence score clamped to [0.0, 1.0].
/// Carried by model-sourced assertions and by every synthesis.
/// Deserialization rejects values outside the range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(try_from = "f64")]
#[ts(export)]
pub struct Confidence(f64);

impl Confidence {
    /// Lower bound of the `high` band.
    pub const HIGH: f64 = 0.8;
    /// Lower bound of the `medium` band.
    pub const MEDIUM: f64 = 0.5;

    pub const ZERO: Confidence = Confidence(0.0);

    /// Create a new Confidence, clamping to [0.0, 1.0]. NaN and `-0.0` map
    /// to 0.0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() || value <= 0.0 {
            return Self::ZERO;
        }
        Self(value.min(1.0))
    }

    /// Create a Confidence only if `value` already lies in [0.0, 1.0].
    pub fn try_new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then(|| Self::new(value))
    }

    /// Get the raw f64 value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Presentation band consumers derive from the score.
    pub fn band(self) -> ConfidenceBand {
        if self.0 >= Self::HIGH {
            ConfidenceBand::High
        } else if self.0 >= Self::MEDIUM {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }

    /// Total ordering over scores. Values are never NaN after construction.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Confidence {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl TryFrom<f64> for Confidence {
    type Error = VerityError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or_else(|| {
            VerityError::ValidationError(format!("confidence {value} outside [0, 1]"))
        })
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

/// `high ≥ 0.8`, `medium ≥ 0.5`, else `low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}
