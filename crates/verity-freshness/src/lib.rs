//! # verity-freshness
//!
//! Judges how stale an assertion's last verification is.
//!
//! The reference date is `verified_at`, falling back to `updated_at`. Its age
//! is compared against a fixed window (360 days by default):
//!
//! | age            | level        |
//! |----------------|--------------|
//! | `< 0.5 × W`    | `fresh`      |
//! | `< 0.75 × W`   | `aging`      |
//! | `< W`          | `stale`      |
//! | otherwise      | `unverified` |
//!
//! Everything here is pure and safe to call from any thread.

pub mod level;
pub mod model;

pub use level::FreshnessLevel;
pub use model::{FreshnessAssessment, FreshnessModel};
