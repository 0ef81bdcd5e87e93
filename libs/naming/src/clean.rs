//! Input cleaning and final-name validation.
//!
//! Cleaning removes every character matched by a type's clean pattern.
//! Validation checks a candidate against the type's validation pattern.

use resname_catalog::ResourceConstraint;

/// Removes every character matched by the constraint's clean pattern.
///
/// An empty input or a missing constraint is returned unchanged.
pub fn clean_string(input: &str, constraint: Option<&ResourceConstraint>) -> String {
    if input.is_empty() {
        return String::new();
    }

    match constraint.and_then(ResourceConstraint::clean_pattern) {
        Some(pattern) => pattern.replace_all(input, "").into_owned(),
        None => input.to_string(),
    }
}

/// Cleans each element, preserving order and length.
pub fn clean_slice(inputs: &[String], constraint: Option<&ResourceConstraint>) -> Vec<String> {
    inputs
        .iter()
        .map(|s| clean_string(s, constraint))
        .collect()
}

/// Checks a candidate against the constraint's validation pattern.
///
/// A type without a validation pattern accepts nothing.
pub fn matches_accept(candidate: &str, constraint: &ResourceConstraint) -> bool {
    constraint
        .accept_pattern()
        .is_some_and(|pattern| pattern.is_match(candidate))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use resname_catalog::{ResourceDefinition, Scope};
    use rstest::rstest;

    use super::*;

    fn constraint(clean: &str, accept: &str) -> ResourceConstraint {
        ResourceConstraint::compile(&ResourceDefinition {
            name: "test_type".to_string(),
            alias: None,
            slug: "tt".to_string(),
            min_length: 1,
            max_length: 24,
            lowercase: true,
            regex: clean.to_string(),
            validation_regex: accept.to_string(),
            dashes: false,
            scope: Scope::Global,
        })
        .unwrap()
    }

    #[rstest]
    #[case("my-storage_01", "mystorage01")]
    #[case("MyStorage", "ytorage")]
    #[case("abc", "abc")]
    #[case("---", "")]
    #[case("Ünïcode", "ncode")]
    fn test_clean_removes_matches(#[case] input: &str, #[case] expected: &str) {
        let c = constraint("[^0-9a-z]", "^[a-z0-9]{3,24}$");
        assert_eq!(clean_string(input, Some(&c)), expected);
    }

    #[test]
    fn test_clean_empty_input() {
        let c = constraint("[^0-9a-z]", "^[a-z0-9]+$");
        assert_eq!(clean_string("", Some(&c)), "");
    }

    #[test]
    fn test_clean_without_constraint() {
        assert_eq!(clean_string("Any Thing!", None), "Any Thing!");
    }

    #[test]
    fn test_clean_with_empty_pattern() {
        let c = constraint("", "^.+$");
        assert_eq!(clean_string("Any Thing!", Some(&c)), "Any Thing!");
    }

    #[test]
    fn test_clean_slice_preserves_shape() {
        let c = constraint("[^0-9a-z]", "^[a-z0-9]+$");
        let inputs = vec!["a-b".to_string(), "---".to_string(), "c".to_string()];
        assert_eq!(clean_slice(&inputs, Some(&c)), vec!["ab", "", "c"]);
    }

    #[test]
    fn test_matches_accept() {
        let c = constraint("[^0-9a-z]", "^[a-z0-9]{3,24}$");
        assert!(matches_accept("abc123", &c));
        assert!(!matches_accept("ab", &c));
        assert!(!matches_accept("abc@123", &c));
        assert!(!matches_accept("ABC", &c));
    }

    #[test]
    fn test_empty_accept_pattern_matches_nothing() {
        let c = constraint("[^0-9a-z]", "");
        assert!(!matches_accept("abc", &c));
        assert!(!matches_accept("", &c));
    }

    proptest! {
        #[test]
        fn prop_clean_is_idempotent(input in ".{0,40}") {
            let c = constraint("[^0-9a-z-]", "^[a-z0-9-]+$");
            let once = clean_string(&input, Some(&c));
            let twice = clean_string(&once, Some(&c));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_cleaned_output_has_no_matches(input in ".{0,40}") {
            let c = constraint("[^0-9a-z]", "^[a-z0-9]+$");
            let cleaned = clean_string(&input, Some(&c));
            prop_assert!(cleaned.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit()));
        }
    }
}
