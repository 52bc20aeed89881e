//! Property-based tests for entry and comment validation

use daybook::shared::validation::{validate_comment, validate_entry, EntryOperation, MAX_TITLE_CHARS};
use daybook::shared::EntryInput;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_title_limit_is_exact(title in "[a-zA-Z ]{1,40}") {
        let input = EntryInput {
            date: Some("2025-01-01".to_string()),
            title: Some(title.clone()),
            content: Some("body".to_string()),
        };
        let result = validate_entry(&input, EntryOperation::Create);
        prop_assert_eq!(result.is_ok(), title.chars().count() <= MAX_TITLE_CHARS);
    }

    #[test]
    fn prop_update_limit_is_stricter_than_create(len in 1usize..12_000) {
        let input = EntryInput {
            date: Some("2025-01-01".to_string()),
            title: Some("t".to_string()),
            content: Some("x".repeat(len)),
        };
        let on_create = validate_entry(&input, EntryOperation::Create).is_ok();
        let on_update = validate_entry(&input, EntryOperation::Update).is_ok();
        prop_assert!(!on_update || on_create);
    }

    #[test]
    fn prop_blank_comments_are_rejected(spaces in "[ \t\n]{0,20}") {
        prop_assert!(validate_comment(Some(&spaces)).is_err());
    }
}
