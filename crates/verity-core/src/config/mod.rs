pub mod defaults;
mod freshness_config;
mod observability_config;
mod resolution_config;
mod storage_config;
mod synthesis_config;

pub use freshness_config::FreshnessConfig;
pub use observability_config::ObservabilityConfig;
pub use resolution_config::ResolutionConfig;
pub use storage_config::StorageConfig;
pub use synthesis_config::SynthesisConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{VerityError, VerityResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VerityConfig {
    pub freshness: FreshnessConfig,
    pub resolution: ResolutionConfig,
    pub synthesis: SynthesisConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl VerityConfig {
    /// Parse a TOML document. Missing sections and keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> VerityResult<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| VerityError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> VerityResult<String> {
        toml::to_string(self).map_err(|e| VerityError::ConfigError(e.to_string()))
    }

    /// Reject values that would make the engine misbehave.
    pub fn validate(&self) -> VerityResult<()> {
        self.freshness.validate()?;
        self.synthesis.validate()
    }
}
