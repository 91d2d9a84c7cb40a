//! Bounded generation context: selection, truncation, token budget, prompt.

mod builder;
mod prompt;
mod tokens;

pub use builder::{order_for_context, ContextBuilder, GenerationContext};
pub use prompt::{render_prompt, SYSTEM_INSTRUCTIONS};
pub use tokens::{Allocation, TokenBudget, TokenCounter};
