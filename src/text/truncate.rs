//! Display truncation for long identifiers.
//!
//! Lengths are counted in Unicode scalar values (`char`), not grapheme
//! clusters: a combining sequence or astral symbol can be split at the
//! boundary. That matches the original portal behavior and is an accepted
//! limitation, not something to paper over here.

use std::borrow::Cow;

/// Default visible-character bound used by the UI (accession/hash columns).
pub const DEFAULT_TRUNCATE_LEN: usize = 7;

/// Truncate a string to at most `size` characters plus a single ellipsis.
///
/// Inputs at or below the bound are borrowed unchanged.
///
/// # Examples
/// ```
/// use portal_display::text::truncate::{DEFAULT_TRUNCATE_LEN, truncate};
///
/// assert_eq!(truncate("abcdefgh", DEFAULT_TRUNCATE_LEN), "abcdefg…");
/// assert_eq!(truncate("abc", DEFAULT_TRUNCATE_LEN), "abc");
/// ```
pub fn truncate(s: &str, size: usize) -> Cow<'_, str> {
    match s.char_indices().nth(size) {
        Some((byte_pos, _)) => {
            let mut out = String::with_capacity(byte_pos + '…'.len_utf8());
            out.push_str(&s[..byte_pos]);
            out.push('…');
            Cow::Owned(out)
        }
        None => Cow::Borrowed(s),
    }
}

/// Shorten a hash (or any identifier) to its first seven characters plus
/// `"..."`.
///
/// Only inputs strictly shorter than seven characters pass through, so a
/// seven-character input still gets the suffix. That boundary quirk is
/// long-standing display behavior and is kept as-is.
pub fn short_hash(hash: &str) -> Cow<'_, str> {
    let mut indices = hash.char_indices();
    match indices.nth(DEFAULT_TRUNCATE_LEN - 1) {
        // At least 7 chars: keep the first 7 and append the dots.
        Some((pos, c)) => {
            let end = pos + c.len_utf8();
            let mut out = String::with_capacity(end + 3);
            out.push_str(&hash[..end]);
            out.push_str("...");
            Cow::Owned(out)
        }
        None => Cow::Borrowed(hash),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_borrowed() {
        let out = truncate("abc", 7);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "abc");
    }

    #[test]
    fn test_exact_bound_unchanged() {
        assert_eq!(truncate("abcdefg", 7), "abcdefg");
    }

    #[test]
    fn test_truncates_with_single_ellipsis() {
        assert_eq!(truncate("abcdefgh", 7), "abcdefg…");
        assert_eq!(truncate("GHGAD12345678901234", 7), "GHGAD12…");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(truncate("äöüäöüäöü", 7), "äöüäöüä…");
    }

    #[test]
    fn test_zero_bound() {
        assert_eq!(truncate("abc", 0), "…");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_short_hash_passthrough_below_seven() {
        assert_eq!(short_hash("abc123"), "abc123");
        assert_eq!(short_hash(""), "");
    }

    #[test]
    fn test_short_hash_seven_chars_still_suffixed() {
        assert_eq!(short_hash("abcdefg"), "abcdefg...");
    }

    #[test]
    fn test_short_hash_truncates_long_input() {
        assert_eq!(short_hash("0123456789abcdef"), "0123456...");
    }
}
