/// Verity system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Days after which an assertion that was never re-verified is fully stale.
pub const FRESHNESS_WINDOW_DAYS: i64 = 360;

/// Largest accepted freshness window (one hundred years).
pub const MAX_FRESHNESS_WINDOW_DAYS: i64 = 36_500;

/// Fraction of the freshness window below which an assertion is `fresh`.
pub const FRESH_FRACTION: f64 = 0.5;

/// Fraction of the freshness window below which an assertion is `aging`.
pub const AGING_FRACTION: f64 = 0.75;

/// Sentence range requested from the generator for a synthesis.
pub const SYNTHESIS_MIN_SENTENCES: usize = 2;
pub const SYNTHESIS_MAX_SENTENCES: usize = 4;
