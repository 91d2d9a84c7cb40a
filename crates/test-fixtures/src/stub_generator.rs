//! Deterministic stand-in for the external generative function.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde_json::json;

use verity_core::errors::{ExternalModelError, VerityResult};
use verity_core::models::GenerationRequest;
use verity_core::traits::ISynthesisGenerator;

/// How a [`StubGenerator`] answers.
#[derive(Debug, Clone)]
pub enum StubBehavior {
    /// Return this payload verbatim.
    Respond(serde_json::Value),
    /// Cite every assertion in the request context, plus `extra_ids`.
    CiteContext {
        text: String,
        confidence: f64,
        extra_ids: Vec<String>,
    },
    /// Fail with a transport error.
    Fail(String),
    /// Sleep, then answer as `then`.
    Delay {
        duration: Duration,
        then: Box<StubBehavior>,
    },
}

/// Generator returning fixed, schema-conformant (or deliberately broken)
/// payloads. Records every request it receives.
pub struct StubGenerator {
    version: String,
    behavior: StubBehavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl StubGenerator {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            version: "stub-model-1".to_string(),
            behavior,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Cites the whole context with a fixed two-sentence text.
    pub fn citing_context() -> Self {
        Self::new(StubBehavior::CiteContext {
            text: "Amounts are stored in cents. Refunds are recorded as negative amounts."
                .to_string(),
            confidence: 0.86,
            extra_ids: Vec::new(),
        })
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ISynthesisGenerator for StubGenerator {
    fn model_version(&self) -> &str {
        &self.version
    }

    async fn generate(&self, request: &GenerationRequest) -> VerityResult<serde_json::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(request.clone());

        let mut behavior = &self.behavior;
        loop {
            match behavior {
                StubBehavior::Respond(payload) => return Ok(payload.clone()),
                StubBehavior::CiteContext {
                    text,
                    confidence,
                    extra_ids,
                } => {
                    let mut cited: Vec<String> =
                        request.citable_ids().map(str::to_string).collect();
                    cited.extend(extra_ids.iter().cloned());
                    return Ok(json!({
                        "synthesisText": text,
                        "confidenceScore": confidence,
                        "citedAssertionIds": cited,
                    }));
                }
                StubBehavior::Fail(message) => {
                    return Err(ExternalModelError::Transport {
                        message: message.clone(),
                    }
                    .into())
                }
                StubBehavior::Delay { duration, then } => {
                    tokio::time::sleep(*duration).await;
                    behavior = then;
                }
            }
        }
    }
}
