//! Citation filtering against the generation context.

use std::collections::{BTreeSet, HashSet};

/// Outcome of intersecting the model's citations with the context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CitationFilter {
    pub kept: BTreeSet<String>,
    /// Ids outside the context, in response order, deduplicated.
    pub dropped: Vec<String>,
}

/// Keep only ids that were citable; everything else is dropped.
pub fn filter_citations<'a>(
    cited: impl IntoIterator<Item = String>,
    citable: impl IntoIterator<Item = &'a str>,
) -> CitationFilter {
    let citable: HashSet<&str> = citable.into_iter().collect();
    let mut filter = CitationFilter::default();
    for id in cited {
        if citable.contains(id.as_str()) {
            filter.kept.insert(id);
        } else if !filter.dropped.contains(&id) {
            filter.dropped.push(id);
        }
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fabricated_ids_are_dropped() {
        let filter = filter_citations(
            ["a1", "ghost", "a2", "ghost", "a1"].map(String::from),
            ["a1", "a2", "a3"],
        );
        assert_eq!(filter.kept.into_iter().collect::<Vec<_>>(), vec!["a1", "a2"]);
        assert_eq!(filter.dropped, vec!["ghost"]);
    }

    #[test]
    fn empty_citations_keep_nothing() {
        let filter = filter_citations(Vec::new(), ["a1"]);
        assert!(filter.kept.is_empty());
        assert!(filter.dropped.is_empty());
    }
}
