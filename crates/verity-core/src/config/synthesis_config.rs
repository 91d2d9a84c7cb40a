use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{VerityError, VerityResult};

/// Synthesis orchestration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Upper bound on assertions placed in the generation context.
    pub max_context_assertions: usize,
    /// Per-language character cap on assertion content.
    pub max_content_chars: usize,
    /// Token budget (cl100k_base) for the enumerated assertion context.
    pub max_context_tokens: usize,
    /// Generation deadline. Expiry is an external model failure.
    pub generation_timeout_secs: u64,
    /// Capacity of the token-count cache.
    pub token_cache_capacity: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            max_context_assertions: defaults::DEFAULT_MAX_CONTEXT_ASSERTIONS,
            max_content_chars: defaults::DEFAULT_MAX_CONTENT_CHARS,
            max_context_tokens: defaults::DEFAULT_MAX_CONTEXT_TOKENS,
            generation_timeout_secs: defaults::DEFAULT_GENERATION_TIMEOUT_SECS,
            token_cache_capacity: defaults::DEFAULT_TOKEN_CACHE_CAPACITY,
        }
    }
}

impl SynthesisConfig {
    /// Reject bounds that would hand the generator an empty context or an
    /// already-expired deadline.
    pub fn validate(&self) -> VerityResult<()> {
        if self.max_context_assertions == 0 {
            return Err(VerityError::ConfigError(
                "synthesis.max_context_assertions must be at least 1".into(),
            ));
        }
        if self.generation_timeout_secs == 0 {
            return Err(VerityError::ConfigError(
                "synthesis.generation_timeout_secs must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
