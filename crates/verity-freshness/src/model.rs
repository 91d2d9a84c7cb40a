use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use verity_core::config::FreshnessConfig;
use verity_core::constants::{
    AGING_FRACTION, FRESHNESS_WINDOW_DAYS, FRESH_FRACTION, MAX_FRESHNESS_WINDOW_DAYS,
};
use verity_core::KnowledgeAssertion;

use crate::level::FreshnessLevel;

const SECONDS_PER_DAY: i64 = 86_400;

/// Freshness of one assertion at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FreshnessAssessment {
    pub level: FreshnessLevel,
    /// `verified_at` if present, else `updated_at`.
    pub reference_date: DateTime<Utc>,
    /// Whole days elapsed since the reference date.
    pub days_since: i64,
    /// Whether the reference date came from an explicit verification.
    pub verified: bool,
}

/// Maps the age of an assertion's reference date onto a [`FreshnessLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreshnessModel {
    window: Duration,
}

impl FreshnessModel {
    /// Model with the default 360-day window.
    pub fn new() -> Self {
        Self::with_window_days(FRESHNESS_WINDOW_DAYS)
    }

    /// Model with a custom window, clamped to `1..=MAX_FRESHNESS_WINDOW_DAYS`.
    pub fn with_window_days(days: i64) -> Self {
        let days = days.clamp(1, MAX_FRESHNESS_WINDOW_DAYS);
        let window = Duration::try_days(days)
            .unwrap_or_else(|| Duration::days(FRESHNESS_WINDOW_DAYS));
        Self { window }
    }

    pub fn from_config(config: &FreshnessConfig) -> Self {
        Self::with_window_days(config.window_days)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Level for a reference date observed at `now`.
    ///
    /// A reference date in the future counts as age zero.
    pub fn level_at(&self, reference_date: DateTime<Utc>, now: DateTime<Utc>) -> FreshnessLevel {
        let age_secs = (now - reference_date).num_seconds().max(0) as f64;
        let window_secs = self.window.num_seconds() as f64;

        if age_secs < window_secs * FRESH_FRACTION {
            FreshnessLevel::Fresh
        } else if age_secs < window_secs * AGING_FRACTION {
            FreshnessLevel::Aging
        } else if age_secs < window_secs {
            FreshnessLevel::Stale
        } else {
            FreshnessLevel::Unverified
        }
    }

    /// Level for an assertion observed at `now`.
    pub fn level_of(&self, assertion: &KnowledgeAssertion, now: DateTime<Utc>) -> FreshnessLevel {
        self.level_at(assertion.reference_date(), now)
    }

    /// Level for an assertion observed at the current wall-clock time.
    pub fn level(&self, assertion: &KnowledgeAssertion) -> FreshnessLevel {
        self.level_of(assertion, Utc::now())
    }

    /// Full assessment used by badges and tooltips.
    pub fn assess(&self, assertion: &KnowledgeAssertion, now: DateTime<Utc>) -> FreshnessAssessment {
        let reference_date = assertion.reference_date();
        FreshnessAssessment {
            level: self.level_at(reference_date, now),
            reference_date,
            days_since: days_since(reference_date, now),
            verified: assertion.verified_at.is_some(),
        }
    }

    /// Whether the verification has fully expired.
    pub fn is_expired(&self, assertion: &KnowledgeAssertion, now: DateTime<Utc>) -> bool {
        self.level_of(assertion, now) == FreshnessLevel::Unverified
    }
}

impl Default for FreshnessModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole days between `reference_date` and `now`, never negative.
pub fn days_since(reference_date: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - reference_date).num_seconds().max(0) / SECONDS_PER_DAY
}
