use crate::errors::VerityResult;
use crate::models::GenerationRequest;

/// The external generative function: prompt in, structured JSON out.
///
/// Implementations return the raw response payload. Contract validation
/// happens in the orchestrator so every provider is held to the same shape.
#[allow(async_fn_in_trait)]
pub trait ISynthesisGenerator: Send + Sync {
    /// Version identifier recorded on every synthesis this generator produces.
    fn model_version(&self) -> &str;

    /// Produce a response for the request. Transport failures should be
    /// reported as `ExternalModelError::Transport`.
    async fn generate(&self, request: &GenerationRequest) -> VerityResult<serde_json::Value>;
}
