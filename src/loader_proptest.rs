//! Property-based tests for the class-name transform.
//!
//! These tests use proptest to generate random identifiers and verify that
//! the invariants of `class_resource_name` hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::cache::ResolutionKey;
    use crate::loader::class_resource_name;
    use proptest::prelude::*;

    proptest! {
        /// Property: at most one delimiter is turned into a separator
        #[test]
        fn at_most_one_separator_is_introduced(input in "[A-Za-z_]{0,24}") {
            let result = class_resource_name(&input, '_');
            prop_assert!(result.matches('/').count() <= 1);
        }

        /// Property: every delimiter after the first one survives
        #[test]
        fn later_delimiters_are_kept(input in "[A-Za-z_]{0,24}") {
            let result = class_resource_name(&input, '_');
            let before = input.matches('_').count();
            let after = result.matches('_').count();
            prop_assert_eq!(after, before.saturating_sub(1));
        }

        /// Property: the result is lower case
        #[test]
        fn result_is_lowercase(input in "[A-Za-z0-9_]{0,24}") {
            let result = class_resource_name(&input, '_');
            prop_assert_eq!(result.to_lowercase(), result);
        }

        /// Property: names without the delimiter are only lower-cased
        #[test]
        fn names_without_delimiter_are_only_lowercased(input in "[A-Za-z0-9]{1,24}") {
            prop_assert_eq!(class_resource_name(&input, '_'), input.to_lowercase());
        }

        /// Property: the lookup key always sits under the classes category
        #[test]
        fn key_is_under_classes(input in "[A-Za-z_]{1,24}") {
            let name = class_resource_name(&input, '_');
            let key = ResolutionKey::new("classes", &name, "js");
            prop_assert!(key.as_str().starts_with("classes/"));
            prop_assert!(key.as_str().ends_with(".js"));
        }
    }
}
