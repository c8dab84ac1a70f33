// ABOUTME: Tests for version tag parsing and successor derivation.
// ABOUTME: Covers parse validation, advance semantics, and display round-trips.

use proptest::prelude::*;
use slipway::types::{ParseVersionTagError, VersionTag};

mod parsing {
    use super::*;

    #[test]
    fn parse_dotted_tag() {
        let tag = VersionTag::parse("1.2.7").unwrap();
        assert_eq!(tag.to_string(), "1.2.7");
        assert_eq!(tag.components().count(), 3);
    }

    #[test]
    fn parse_single_component() {
        let tag = VersionTag::parse("42").unwrap();
        assert_eq!(tag.to_string(), "42");
        assert_eq!(tag.components().count(), 1);
    }

    #[test]
    fn parse_trims_whitespace() {
        let tag = VersionTag::parse("  1.2.7\n").unwrap();
        assert_eq!(tag.to_string(), "1.2.7");
    }

    #[test]
    fn parse_keeps_non_numeric_components() {
        // Only advance() cares that the last component is numeric.
        let tag = VersionTag::parse("v2.0.3").unwrap();
        assert_eq!(tag.to_string(), "v2.0.3");

        let tag = VersionTag::parse("1.2.x").unwrap();
        assert_eq!(tag.to_string(), "1.2.x");
    }

    #[test]
    fn parse_empty_returns_error() {
        assert!(matches!(
            VersionTag::parse(""),
            Err(ParseVersionTagError::Empty)
        ));
        assert!(matches!(
            VersionTag::parse("   "),
            Err(ParseVersionTagError::Empty)
        ));
    }

    #[test]
    fn parse_empty_component_returns_error() {
        for input in ["1..2", ".1.2", "1.2.", "."] {
            assert!(
                matches!(
                    VersionTag::parse(input),
                    Err(ParseVersionTagError::EmptyComponent)
                ),
                "expected EmptyComponent for {input:?}"
            );
        }
    }
}

mod advancing {
    use super::*;

    #[test]
    fn advance_increments_last_component() {
        let tag = VersionTag::parse("1.2.7").unwrap();
        let next = tag.advance().unwrap();
        assert_eq!(next.to_string(), "1.2.8");
    }

    #[test]
    fn advance_is_immutable() {
        let tag = VersionTag::parse("1.2.7").unwrap();
        let _ = tag.advance().unwrap();
        assert_eq!(tag.to_string(), "1.2.7");
    }

    #[test]
    fn advance_single_component() {
        let tag = VersionTag::parse("7").unwrap();
        assert_eq!(tag.advance().unwrap().to_string(), "8");
    }

    #[test]
    fn advance_carries_non_numeric_prefix_components() {
        let tag = VersionTag::parse("v2.0.3").unwrap();
        assert_eq!(tag.advance().unwrap().to_string(), "v2.0.4");
    }

    #[test]
    fn advance_rolls_over_digit_boundary() {
        let tag = VersionTag::parse("1.2.9").unwrap();
        assert_eq!(tag.advance().unwrap().to_string(), "1.2.10");
    }

    #[test]
    fn advance_drops_leading_zeros() {
        // Documented policy: the last component is a plain integer.
        let tag = VersionTag::parse("1.2.007").unwrap();
        assert_eq!(tag.advance().unwrap().to_string(), "1.2.8");
    }

    #[test]
    fn advance_non_numeric_last_component_returns_error() {
        let tag = VersionTag::parse("1.2.x").unwrap();
        assert!(matches!(
            tag.advance(),
            Err(ParseVersionTagError::NonNumericComponent(c)) if c == "x"
        ));
    }
}

proptest! {
    /// advance() changes only the last component, increases it by exactly 1,
    /// and preserves the count and values of all preceding components.
    #[test]
    fn advance_only_touches_last_component(components in prop::collection::vec(0u64..10_000, 1..6)) {
        let input = components
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");

        let tag = VersionTag::parse(&input).unwrap();
        let next = tag.advance().unwrap();

        let before: Vec<&str> = tag.components().collect();
        let after: Vec<&str> = next.components().collect();

        prop_assert_eq!(before.len(), after.len());
        prop_assert_eq!(&before[..before.len() - 1], &after[..after.len() - 1]);

        let last_before: u64 = before.last().unwrap().parse().unwrap();
        let last_after: u64 = after.last().unwrap().parse().unwrap();
        prop_assert_eq!(last_after, last_before + 1);
    }
}
