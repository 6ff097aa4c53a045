//! Property-based invariant tests for the display transforms.
//!
//! These verify the contracts that must hold for arbitrary inputs:
//!
//! 1. Pluralization yields "s" for every count except exactly 1.
//! 2. Capitalisation is idempotent and leaves the tail untouched.
//! 3. Truncation respects its bound and is identity within it.
//! 4. Line splitting never yields empty or untrimmed lines.
//! 5. Highlight segments always concatenate back to the input.
//! 6. State mappers are total: any raw value resolves to a fallback.

use std::borrow::Cow;

use portal_display::status::access::access_request_status_class;
use portal_display::status::account::account_status_class;
use portal_display::status::iva::{iva_state_display, iva_type_display};
use portal_display::text::bytes::format_bytes;
use portal_display::text::capitalise::capitalise;
use portal_display::text::highlight::highlight_matches;
use portal_display::text::lines::split_lines;
use portal_display::text::plural::plural_s;
use portal_display::text::truncate::{short_hash, truncate};

use proptest::prelude::*;

proptest! {
    #[test]
    fn plural_suffix_total(n in any::<usize>()) {
        let suffix = plural_s(n);
        if n == 1 {
            prop_assert_eq!(suffix, "");
        } else {
            prop_assert_eq!(suffix, "s");
        }
    }

    #[test]
    fn capitalise_is_idempotent(s in "\\PC{0,40}") {
        let once = capitalise(&s);
        prop_assert_eq!(capitalise(&once), once);
    }

    #[test]
    fn capitalise_keeps_tail(s in "\\PC{1,40}") {
        let out = capitalise(&s);
        let tail: String = s.chars().skip(1).collect();
        prop_assert!(out.ends_with(&tail));
    }

    #[test]
    fn truncate_identity_within_bound(s in "\\PC{0,20}", extra in 0usize..10) {
        let bound = s.chars().count() + extra;
        prop_assert_eq!(truncate(&s, bound), Cow::Borrowed(s.as_str()));
    }

    #[test]
    fn truncate_respects_bound(s in "\\PC{0,60}", size in 0usize..20) {
        let out = truncate(&s, size);
        // Either unchanged, or `size` chars plus the ellipsis.
        if out != s {
            prop_assert_eq!(out.chars().count(), size + 1);
            prop_assert!(out.ends_with('…'));
            let kept: String = s.chars().take(size).collect();
            prop_assert!(out.starts_with(&kept));
        }
    }

    #[test]
    fn short_hash_bounded(s in "[0-9a-f]{0,40}") {
        let out = short_hash(&s);
        prop_assert!(out.chars().count() <= 10);
        if s.chars().count() >= 7 {
            prop_assert!(out.ends_with("..."));
        } else {
            prop_assert_eq!(out, s.as_str());
        }
    }

    #[test]
    fn split_lines_yields_trimmed_non_empty(s in "\\PC{0,80}") {
        for line in split_lines(&s) {
            prop_assert!(!line.is_empty());
            prop_assert_eq!(line.trim(), line.as_str());
            prop_assert!(!line.contains('\n'));
            prop_assert!(!line.contains('\r'));
        }
    }

    #[test]
    fn highlight_segments_cover_input(
        text in "[a-zA-Z ]{0,40}",
        needle in "[a-zA-Z]{0,5}",
    ) {
        let segments = highlight_matches(&text, &needle);
        let joined: String = segments.iter().map(|seg| seg.text.as_str()).collect();
        prop_assert_eq!(joined, text);
    }

    #[test]
    fn highlight_marks_are_case_insensitive_matches(
        text in "[a-zA-Z ]{0,40}",
        needle in "[a-zA-Z]{1,5}",
    ) {
        for segment in highlight_matches(&text, &needle) {
            if segment.highlighted {
                prop_assert_eq!(segment.text.to_lowercase(), needle.to_lowercase());
            }
        }
    }

    #[test]
    fn iva_state_display_is_total(raw in "\\PC{0,20}") {
        let display = iva_state_display(&raw);
        prop_assert!(!display.name.is_empty() || raw.is_empty());
        prop_assert!(display.class.starts_with("text-"));
    }

    #[test]
    fn iva_type_display_is_total(raw in "\\PC{0,20}", value in "\\PC{0,20}") {
        // Must never panic and always produce a display name for known types.
        let display = iva_type_display(&raw, &value);
        if !display.icon.is_empty() {
            prop_assert!(display.type_and_value.contains(&value));
        }
    }

    #[test]
    fn status_classes_are_total(raw in "\\PC{0,20}") {
        let access = access_request_status_class(&raw);
        prop_assert!(access.is_empty() || access.starts_with("text-"));
        prop_assert!(account_status_class(&raw).starts_with("text-"));
    }

    #[test]
    fn format_bytes_always_ends_with_unit(n in any::<u64>()) {
        let out = format_bytes(n);
        prop_assert!(out.ends_with('B'));
        let nbsp = '\u{a0}';
        prop_assert!(out.contains(nbsp));
    }
}
