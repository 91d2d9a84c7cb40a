//! Tracing setup: subscriber initialisation, span definitions, event types.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use verity_core::config::ObservabilityConfig;

/// Build the filter: `RUST_LOG` when set and valid, otherwise the
/// configured level, otherwise `info`.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns `false` when a subscriber was already installed, which leaves
/// the existing one in place.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = env_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let installed = if config.json_logs {
        builder
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
    installed.is_ok()
}
