use chrono::Duration;
use test_fixtures::{fixed_now, AssertionBuilder};
use verity_core::config::{ResolutionConfig, VerityConfig};
use verity_core::models::{KnowledgeStatus, WinningSourceType};
use verity_core::{AssertionKind, AssertionStatus, SourceType};
use verity_freshness::FreshnessModel;
use verity_resolution::TrustResolver;

fn expiring_resolver() -> TrustResolver {
    TrustResolver::new(
        ResolutionConfig {
            treat_expired_as_unverified: true,
        },
        FreshnessModel::new(),
    )
}

#[test]
fn default_resolver_ignores_freshness() {
    let now = fixed_now();
    let stale = AssertionBuilder::new("old")
        .status(AssertionStatus::Approved)
        .updated_at(now - Duration::days(500))
        .build();
    let resolver = TrustResolver::default();
    let status = resolver.knowledge_status_at(&[stale], &[], None, now);
    assert_eq!(status.status, KnowledgeStatus::Verified);
}

#[test]
fn expired_approval_is_demoted_when_configured() {
    let now = fixed_now();
    let stale = AssertionBuilder::new("old")
        .status(AssertionStatus::Approved)
        .updated_at(now - Duration::days(500))
        .build();
    let resolver = expiring_resolver();

    assert_eq!(resolver.effective_status(&stale, now), AssertionStatus::Review);
    let status = resolver.knowledge_status_at(std::slice::from_ref(&stale), &[], None, now);
    assert_eq!(status.status, KnowledgeStatus::Unverified);
    assert_eq!(status.approved_count, 0);
    assert_eq!(status.winning_source_type, WinningSourceType::None);
}

#[test]
fn reverified_approval_keeps_its_rank() {
    let now = fixed_now();
    let reverified = AssertionBuilder::new("old")
        .status(AssertionStatus::Approved)
        .updated_at(now - Duration::days(500))
        .verified_at(now - Duration::days(10))
        .build();
    let resolver = expiring_resolver();
    assert_eq!(resolver.effective_status(&reverified, now), AssertionStatus::Approved);
}

#[test]
fn demoted_human_winner_requires_review() {
    let now = fixed_now();
    let candidates = vec![
        AssertionBuilder::new("curator")
            .status(AssertionStatus::Approved)
            .updated_at(now - Duration::days(400))
            .build(),
        AssertionBuilder::new("feed")
            .source(SourceType::Integration)
            .status(AssertionStatus::Approved)
            .build(),
    ];
    let result = expiring_resolver()
        .resolve_conflict_at(&candidates, now)
        .unwrap();
    assert_eq!(result.winner.id, "curator");
    assert_eq!(result.winner.status, AssertionStatus::Approved);
    assert!(result.requires_review);
}

#[test]
fn expired_deprecation_still_flags() {
    let now = fixed_now();
    let deprecation = AssertionBuilder::new("dep")
        .kind(AssertionKind::Deprecation)
        .status(AssertionStatus::Approved)
        .updated_at(now - Duration::days(900))
        .build();
    let status = expiring_resolver().column_status_at(&[deprecation], None, now);
    assert!(status.has_deprecation);
}

#[test]
fn from_config_uses_configured_window() {
    let config = VerityConfig::from_toml(
        "[freshness]\nwindow_days = 30\n[resolution]\ntreat_expired_as_unverified = true\n",
    )
    .unwrap();
    let resolver = TrustResolver::from_config(&config);
    assert_eq!(resolver.freshness().window(), Duration::days(30));
    assert!(resolver.config().treat_expired_as_unverified);
}
