use verity_core::config::SynthesisConfig;
use verity_core::models::{ContextAssertion, EntityDescriptor, GenerationRequest};
use verity_core::{BilingualText, KnowledgeAssertion};

use super::prompt::{render_assertion, render_prompt, SYSTEM_INSTRUCTIONS};
use super::tokens::{TokenBudget, TokenCounter};

/// A bounded request ready for the generator.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub request: GenerationRequest,
    /// Approved assertions left out by the count or token bounds.
    pub omitted: usize,
    /// cl100k_base tokens spent on assertion blocks.
    pub context_tokens: usize,
    /// blake3 hex digest of the instructions and rendered prompt.
    pub context_hash: String,
}

/// Builds the generation context for one entity.
pub struct ContextBuilder<'a> {
    config: &'a SynthesisConfig,
    counter: &'a TokenCounter,
}

impl<'a> ContextBuilder<'a> {
    pub fn new(config: &'a SynthesisConfig, counter: &'a TokenCounter) -> Self {
        Self { config, counter }
    }

    /// Select, truncate, and budget `approved` into a request.
    ///
    /// Canonical assertions come first, then the most recently verified or
    /// updated. At most `max_context_assertions` are considered, each
    /// content language is cut to `max_content_chars`, and blocks are
    /// admitted in order while they fit `max_context_tokens` (see
    /// [`TokenBudget::allocate`]).
    pub fn build(
        &self,
        entity: &EntityDescriptor,
        mut approved: Vec<KnowledgeAssertion>,
    ) -> GenerationContext {
        let total = approved.len();
        order_for_context(&mut approved);
        approved.truncate(self.config.max_context_assertions);

        let candidates: Vec<ContextAssertion> = approved
            .iter()
            .map(|a| ContextAssertion {
                id: a.id.clone(),
                kind: a.kind,
                content: truncate_content(&a.content, self.config.max_content_chars),
                author: a.author.clone(),
                status: a.status,
            })
            .collect();
        let blocks: Vec<String> = candidates.iter().map(render_assertion).collect();

        let allocations =
            TokenBudget::new(self.counter).allocate(&blocks, self.config.max_context_tokens);

        let context_tokens = allocations.iter().map(|a| a.tokens).sum();
        let admitted_blocks: Vec<String> = allocations
            .iter()
            .map(|a| blocks[a.index].clone())
            .collect();
        let assertions: Vec<ContextAssertion> = allocations
            .iter()
            .map(|a| candidates[a.index].clone())
            .collect();

        let prompt = render_prompt(entity, &admitted_blocks);
        let mut hasher = blake3::Hasher::new();
        hasher.update(SYSTEM_INSTRUCTIONS.as_bytes());
        hasher.update(prompt.as_bytes());
        let context_hash = hasher.finalize().to_hex().to_string();

        GenerationContext {
            omitted: total - assertions.len(),
            context_tokens,
            context_hash,
            request: GenerationRequest {
                system_instructions: SYSTEM_INSTRUCTIONS.to_string(),
                entity: entity.clone(),
                assertions,
                prompt,
            },
        }
    }
}

/// Canonical first, then newest reference date, then id.
pub fn order_for_context(assertions: &mut [KnowledgeAssertion]) {
    assertions.sort_by(|a, b| {
        b.is_canonical
            .cmp(&a.is_canonical)
            .then_with(|| b.reference_date().cmp(&a.reference_date()))
            .then_with(|| a.id.cmp(&b.id))
    });
}

fn truncate_content(content: &BilingualText, max_chars: usize) -> BilingualText {
    BilingualText {
        primary: content.primary.as_deref().map(|s| truncate_chars(s, max_chars)),
        secondary: content
            .secondary
            .as_deref()
            .map(|s| truncate_chars(s, max_chars)),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
