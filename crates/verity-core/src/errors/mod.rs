mod model_error;
mod storage_error;

pub use model_error::ExternalModelError;
pub use storage_error::StorageError;

/// Convenience alias used across the workspace.
pub type VerityResult<T> = Result<T, VerityError>;

/// Top-level error for every Verity operation.
#[derive(Debug, thiserror::Error)]
pub enum VerityError {
    /// Malformed input. Preventing it is the caller's responsibility.
    #[error("validation failed: {0}")]
    ValidationError(String),

    /// No approved assertions exist to synthesize from.
    #[error("no approved assertions for entity {entity_id}")]
    EmptyContext { entity_id: String },

    #[error("external model error: {0}")]
    ExternalModel(#[from] ExternalModelError),

    #[error("entity not found: {id}")]
    EntityNotFound { id: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("concurrency error: {0}")]
    ConcurrencyError(String),
}

impl VerityError {
    /// Whether this is a failure of the generative function.
    pub fn is_external_model(&self) -> bool {
        matches!(self, Self::ExternalModel(_))
    }
}
