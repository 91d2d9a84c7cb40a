/// Failures of the external generative function.
#[derive(Debug, thiserror::Error)]
pub enum ExternalModelError {
    #[error("generation timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("transport failure: {message}")]
    Transport { message: String },

    #[error("response violates output contract: {reason}")]
    SchemaViolation { reason: String },
}
