//! Property tests: citation filtering never admits ids outside the context.

use proptest::prelude::*;
use verity_synthesis::filter_citations;

fn id_strategy() -> impl Strategy<Value = String> {
    "[a-e][0-9]"
}

proptest! {
    #[test]
    fn kept_citations_are_always_citable(
        cited in prop::collection::vec(id_strategy(), 0..20),
        citable in prop::collection::vec(id_strategy(), 0..10),
    ) {
        let filter = filter_citations(cited.clone(), citable.iter().map(String::as_str));
        for id in &filter.kept {
            prop_assert!(citable.contains(id));
        }
        for id in &filter.dropped {
            prop_assert!(!citable.contains(id));
        }
        for id in &cited {
            prop_assert!(filter.kept.contains(id) || filter.dropped.contains(id));
        }
    }
}
