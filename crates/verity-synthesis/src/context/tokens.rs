use moka::sync::Cache;
use std::sync::Arc;
use tiktoken_rs::CoreBPE;

use verity_core::{VerityError, VerityResult};

/// Token counter wrapping tiktoken's cl100k_base tokenizer.
/// Caches results per blake3 content hash.
pub struct TokenCounter {
    bpe: Arc<CoreBPE>,
    cache: Cache<String, usize>,
}

impl TokenCounter {
    /// Create a counter with the given cache capacity.
    pub fn new(cache_capacity: u64) -> VerityResult<Self> {
        let bpe = tiktoken_rs::cl100k_base()
            .map_err(|e| VerityError::ConfigError(format!("load cl100k_base tokenizer: {e}")))?;
        Ok(Self {
            bpe: Arc::new(bpe),
            cache: Cache::new(cache_capacity),
        })
    }

    /// Count tokens in the given text (uncached).
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    /// Count tokens with blake3 content-hash caching.
    pub fn count_cached(&self, text: &str) -> usize {
        let hash = blake3::hash(text.as_bytes()).to_hex().to_string();
        self.cache.get_with(hash, || self.count(text))
    }
}

/// Admits ordered context blocks into a token budget.
pub struct TokenBudget<'a> {
    counter: &'a TokenCounter,
}

/// One block admitted by [`TokenBudget::allocate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Index of the block in the input slice.
    pub index: usize,
    pub tokens: usize,
}

impl<'a> TokenBudget<'a> {
    pub fn new(counter: &'a TokenCounter) -> Self {
        Self { counter }
    }

    /// Admit blocks in priority order while they fit `budget`. A block that
    /// does not fit is skipped and later, smaller blocks may still be
    /// admitted. The first block is admitted even when it alone exceeds the
    /// budget, so a non-empty input never yields an empty allocation.
    pub fn allocate(&self, blocks: &[String], budget: usize) -> Vec<Allocation> {
        let mut remaining = budget;
        let mut allocations = Vec::new();

        for (index, block) in blocks.iter().enumerate() {
            let tokens = self.counter.count_cached(block);
            if index == 0 && tokens > remaining {
                allocations.push(Allocation { index, tokens });
                remaining = 0;
            } else if tokens <= remaining {
                remaining -= tokens;
                allocations.push(Allocation { index, tokens });
            }
        }

        allocations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_count_matches_uncached() {
        let counter = TokenCounter::new(16).unwrap();
        let text = "Revenue is recognised at shipment.";
        assert_eq!(counter.count_cached(text), counter.count(text));
        assert_eq!(counter.count_cached(text), counter.count(text));
        assert!(counter.count(text) > 0);
    }

    #[test]
    fn allocation_skips_items_that_do_not_fit() {
        let counter = TokenCounter::new(16).unwrap();
        let budget = TokenBudget::new(&counter);
        let long = "word ".repeat(200);
        let items = vec!["short one".to_string(), long, "short two".to_string()];
        let small = counter.count("short one") + counter.count("short two");

        let admitted: Vec<usize> = budget
            .allocate(&items, small)
            .into_iter()
            .map(|a| a.index)
            .collect();
        assert_eq!(admitted, vec![0, 2]);
    }

    #[test]
    fn oversized_first_block_is_admitted_alone() {
        let counter = TokenCounter::new(16).unwrap();
        let budget = TokenBudget::new(&counter);
        let items = vec!["word ".repeat(200), "short".to_string()];

        let allocations = budget.allocate(&items, 5);
        assert_eq!(allocations.len(), 1);
        assert_eq!(allocations[0].index, 0);
        assert_eq!(allocations[0].tokens, counter.count(&items[0]));
        assert!(budget.allocate(&[], 5).is_empty());
    }
}
