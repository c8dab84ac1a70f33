// ABOUTME: Tests for log window extraction and artifact pattern matching.
// ABOUTME: Covers window budgets, UTF-8 safety, and the escaped line-break marker.

use slipway::release::log_window::{self, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET};
use slipway::types::VersionTag;

fn tag(s: &str) -> VersionTag {
    VersionTag::parse(s).unwrap()
}

mod windowing {
    use super::*;

    #[test]
    fn head_and_tail_respect_budgets() {
        let raw = "a".repeat(10_000);
        let window = log_window::extract(&raw, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET);

        assert_eq!(window.head().len(), DEFAULT_HEAD_BUDGET);
        assert_eq!(window.tail().len(), DEFAULT_TAIL_BUDGET);
    }

    #[test]
    fn short_text_covers_start_and_end() {
        let raw = "short build log";
        let window = log_window::extract(raw, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET);

        // Head and tail overlap entirely; both cover the whole text.
        assert_eq!(window.head(), raw);
        assert_eq!(window.tail(), raw);
    }

    #[test]
    fn budgets_are_independent() {
        let raw = "0123456789";
        let window = log_window::extract(raw, 3, 4);

        assert_eq!(window.head(), "012");
        assert_eq!(window.tail(), "6789");
    }

    #[test]
    fn zero_budgets_yield_empty_windows() {
        let window = log_window::extract("anything", 0, 0);
        assert_eq!(window.head(), "");
        assert_eq!(window.tail(), "");
    }

    #[test]
    fn multibyte_input_never_splits_a_char() {
        // Each of these is 3 bytes in UTF-8.
        let raw = "构建成功构建成功";
        for head in 0..=raw.len() {
            for tail in 0..=raw.len() {
                let window = log_window::extract(raw, head, tail);
                assert!(window.head().len() <= head);
                assert!(window.tail().len() <= tail);
            }
        }
    }
}

mod artifact_matching {
    use super::*;

    const PUSH_LINE: &str = r"remote: pushing myimage:1.2.8_abcdef\u003cbr\u003e remote: done";

    #[test]
    fn captures_image_path_from_push_line() {
        let window = log_window::extract(PUSH_LINE, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET);
        let artifact = log_window::find_artifact(&window, &tag("1.2.8")).unwrap();

        assert_eq!(artifact.as_str(), "myimage:1.2.8_abcdef");
    }

    #[test]
    fn captures_registry_qualified_path() {
        let raw = r"pushing registry.example.com:5000/team/app:3.0.12_f00dfeed\u003cbr\u003e";
        let window = log_window::extract(raw, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET);
        let artifact = log_window::find_artifact(&window, &tag("3.0.12")).unwrap();

        assert_eq!(
            artifact.as_str(),
            "registry.example.com:5000/team/app:3.0.12_f00dfeed"
        );
    }

    #[test]
    fn absent_version_yields_none() {
        let window = log_window::extract(PUSH_LINE, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET);
        assert!(log_window::find_artifact(&window, &tag("9.9.9")).is_none());
    }

    #[test]
    fn push_line_without_break_marker_yields_none() {
        let raw = "pushing myimage:1.2.8_abcdef";
        let window = log_window::extract(raw, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET);
        assert!(log_window::find_artifact(&window, &tag("1.2.8")).is_none());
    }

    #[test]
    fn version_without_underscore_suffix_yields_none() {
        let raw = r"pushing myimage:1.2.8\u003cbr\u003e";
        let window = log_window::extract(raw, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET);
        assert!(log_window::find_artifact(&window, &tag("1.2.8")).is_none());
    }

    #[test]
    fn match_is_limited_to_head_window() {
        let mut raw = "x".repeat(5000);
        raw.push_str(PUSH_LINE);
        let window = log_window::extract(&raw, 3000, 3000);

        assert!(log_window::find_artifact(&window, &tag("1.2.8")).is_none());
    }

    #[test]
    fn first_push_line_wins() {
        let raw = r"pushing app:1.2.8_first\u003cbr\u003e pushing app:1.2.8_second\u003cbr\u003e";
        let window = log_window::extract(raw, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET);
        let artifact = log_window::find_artifact(&window, &tag("1.2.8")).unwrap();

        assert_eq!(artifact.as_str(), "app:1.2.8_first");
    }

    #[test]
    fn version_regex_metacharacters_are_inert() {
        // A dot in the version must not match arbitrary characters.
        let raw = r"pushing myimage:1x2x8_abcdef\u003cbr\u003e";
        let window = log_window::extract(raw, DEFAULT_HEAD_BUDGET, DEFAULT_TAIL_BUDGET);

        assert!(log_window::find_artifact(&window, &tag("1.2.8")).is_none());
    }
}
