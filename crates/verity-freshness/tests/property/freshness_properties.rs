use chrono::Duration;
use proptest::prelude::*;
use test_fixtures::fixed_now;
use verity_freshness::{FreshnessLevel, FreshnessModel};

proptest! {
    #[test]
    fn level_never_gets_fresher_as_time_advances(
        window_days in 1i64..2_000,
        start_secs in 0i64..(3_000 * 86_400),
        step_secs in 0i64..(400 * 86_400),
    ) {
        let model = FreshnessModel::with_window_days(window_days);
        let reference = fixed_now();
        let earlier = reference + Duration::seconds(start_secs);
        let later = earlier + Duration::seconds(step_secs);
        prop_assert!(model.level_at(reference, earlier) <= model.level_at(reference, later));
    }

    #[test]
    fn anything_past_the_window_is_unverified(
        window_days in 1i64..2_000,
        extra_secs in 0i64..(1_000 * 86_400),
    ) {
        let model = FreshnessModel::with_window_days(window_days);
        let reference = fixed_now();
        let now = reference + Duration::days(window_days) + Duration::seconds(extra_secs);
        prop_assert_eq!(model.level_at(reference, now), FreshnessLevel::Unverified);
    }

    #[test]
    fn reference_at_now_is_fresh(window_days in 1i64..2_000) {
        let model = FreshnessModel::with_window_days(window_days);
        let now = fixed_now();
        prop_assert_eq!(model.level_at(now, now), FreshnessLevel::Fresh);
    }
}
