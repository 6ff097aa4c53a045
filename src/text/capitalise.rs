//! First-letter capitalisation.
//!
//! Uses the standard Unicode case mapping (`char::to_uppercase`), so the
//! first character may expand to more than one character (e.g. `ß` -> `SS`).
//! No locale-specific tailoring is applied.

/// Capitalise the first character of a string.
///
/// Empty input stays empty. The rest of the string is left untouched, so
/// the function is idempotent.
///
/// # Examples
/// ```
/// use portal_display::text::capitalise::capitalise;
///
/// assert_eq!(capitalise("hello world"), "Hello world");
/// assert_eq!(capitalise("24"), "24");
/// assert_eq!(capitalise(""), "");
/// ```
pub fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Capitalise the first character of every space-separated word.
///
/// Splits on plain spaces only (matching how the UI feeds it single-line
/// labels) and preserves the original spacing, including empty segments
/// from consecutive spaces.
pub fn capitalise_words(s: &str) -> String {
    s.split(' ')
        .map(capitalise)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalises_first_letter() {
        assert_eq!(capitalise("hello world"), "Hello world");
        assert_eq!(capitalise("a"), "A");
    }

    #[test]
    fn test_empty_string_unchanged() {
        assert_eq!(capitalise(""), "");
    }

    #[test]
    fn test_non_letter_unchanged() {
        assert_eq!(capitalise("24"), "24");
        assert_eq!(capitalise("_private"), "_private");
    }

    #[test]
    fn test_idempotent() {
        for s in ["hello", "Hello", "ßeta", "ärger", ""] {
            assert_eq!(capitalise(&capitalise(s)), capitalise(s), "failed for {s}");
        }
    }

    #[test]
    fn test_multichar_uppercase_expansion() {
        assert_eq!(capitalise("ßeta"), "SSeta");
    }

    #[test]
    fn test_capitalise_words() {
        assert_eq!(capitalise_words("hello brave world"), "Hello Brave World");
        assert_eq!(capitalise_words("double  space"), "Double  Space");
        assert_eq!(capitalise_words(""), "");
    }
}
