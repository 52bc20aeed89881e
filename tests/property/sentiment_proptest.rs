//! Property-based tests for sentiment classification

use daybook::shared::{classify, AfinnLexicon, Mood};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_classify_never_panics(text in "\\PC{0,200}") {
        let lexicon = AfinnLexicon::new();
        let result = classify(&lexicon, &text);
        prop_assert!(Mood::ALL.contains(&result.mood));
    }

    #[test]
    fn prop_repeated_word_scales_linearly(n in 1usize..50) {
        let text = "happy ".repeat(n);
        let result = classify(&AfinnLexicon::new(), &text);
        prop_assert_eq!(result.score, 3 * n as i32);
        prop_assert_eq!(result.comparative, Some(3.0));
    }
}
