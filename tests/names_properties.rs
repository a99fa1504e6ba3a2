//! Property tests for snake case normalization.

use proptest::prelude::*;
use python_filename_linter::{is_snake_case, to_snake_case};

/// Reference rule: split at every lowercase/digit -> uppercase boundary.
fn split_at_case_boundaries(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::new();
    for (i, c) in chars.iter().enumerate() {
        out.push(*c);
        if let Some(next) = chars.get(i + 1) {
            if (c.is_ascii_lowercase() || c.is_ascii_digit()) && next.is_ascii_uppercase() {
                out.push('_');
            }
        }
    }
    out.to_lowercase()
}

proptest! {
    /// Property: normalizing twice changes nothing
    #[test]
    fn prop_normalization_is_idempotent(name in "[a-zA-Z0-9_-]{0,32}") {
        let once = to_snake_case(&name);
        prop_assert_eq!(to_snake_case(&once), once);
    }

    /// Property: normalized names are always compliant
    #[test]
    fn prop_normalized_names_are_compliant(name in "[a-zA-Z0-9_.-]{0,32}") {
        prop_assert!(is_snake_case(&to_snake_case(&name)));
    }

    /// Property: compliance means lowercase with no hyphen
    #[test]
    fn prop_compliance_agrees_with_definition(name in "\\PC{0,24}") {
        let expected = name == name.to_lowercase() && !name.contains('-');
        prop_assert_eq!(is_snake_case(&name), expected);
    }

    /// Property: underscores appear exactly at case boundaries
    #[test]
    fn prop_boundaries_for_alphanumeric_names(name in "[a-zA-Z0-9]{0,32}") {
        prop_assert_eq!(to_snake_case(&name), split_at_case_boundaries(&name));
    }

    /// Property: compliant names are already normalized
    #[test]
    fn prop_compliant_names_are_fixed_points(name in "[a-z0-9_]{0,32}") {
        prop_assert!(is_snake_case(&name));
        prop_assert_eq!(to_snake_case(&name), name);
    }
}
