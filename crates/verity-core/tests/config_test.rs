use verity_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = VerityConfig::from_toml("").unwrap();

    assert_eq!(config.freshness.window_days, 360);
    assert!(!config.resolution.treat_expired_as_unverified);

    assert_eq!(config.synthesis.max_context_assertions, 50);
    assert_eq!(config.synthesis.max_content_chars, 2_000);
    assert_eq!(config.synthesis.max_context_tokens, 6_000);
    assert_eq!(config.synthesis.generation_timeout_secs, 60);

    assert_eq!(config.storage.db_path, "verity.db");
    assert_eq!(config.storage.busy_timeout_ms, 5_000);

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[freshness]
window_days = 180

[synthesis]
max_context_assertions = 10
"#;
    let config = VerityConfig::from_toml(toml).unwrap();
    assert_eq!(config.freshness.window_days, 180);
    assert_eq!(config.synthesis.max_context_assertions, 10);
    // Non-overridden fields keep defaults
    assert_eq!(config.synthesis.generation_timeout_secs, 60);
    assert_eq!(config.storage.db_path, "verity.db");
}

#[test]
fn config_serde_roundtrip() {
    let config = VerityConfig::default();
    let toml_str = config.to_toml().unwrap();
    let roundtripped = VerityConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.freshness.window_days, config.freshness.window_days);
    assert_eq!(roundtripped.storage.db_path, config.storage.db_path);
}

#[test]
fn config_rejects_non_positive_window() {
    let err = VerityConfig::from_toml("[freshness]\nwindow_days = 0\n").unwrap_err();
    assert!(err.to_string().contains("window_days"));
}

#[test]
fn config_rejects_window_beyond_upper_bound() {
    let err = VerityConfig::from_toml("[freshness]\nwindow_days = 9000000000000000\n").unwrap_err();
    assert!(matches!(err, verity_core::VerityError::ConfigError(_)));
    assert!(err.to_string().contains("window_days"));

    let max = verity_core::constants::MAX_FRESHNESS_WINDOW_DAYS;
    let config = VerityConfig::from_toml(&format!("[freshness]\nwindow_days = {max}\n")).unwrap();
    assert_eq!(config.freshness.window_days, max);
}

#[test]
fn config_rejects_zero_context_assertions() {
    let err = VerityConfig::from_toml("[synthesis]\nmax_context_assertions = 0\n").unwrap_err();
    assert!(err.to_string().contains("max_context_assertions"));
}

#[test]
fn config_rejects_zero_generation_timeout() {
    let err = VerityConfig::from_toml("[synthesis]\ngeneration_timeout_secs = 0\n").unwrap_err();
    assert!(err.to_string().contains("generation_timeout_secs"));
}

#[test]
fn config_rejects_malformed_toml() {
    let err = VerityConfig::from_toml("[synthesis\nmax = ").unwrap_err();
    assert!(matches!(err, verity_core::VerityError::ConfigError(_)));
}
