//! Newline splitting for free-text metadata fields.
//!
//! Backend text fields arrive with a mix of real newlines, real carriage
//! returns, and their escaped two-character forms (`\n`, `\r`) surviving
//! from upstream JSON re-encoding. The UI renders them as a paragraph list,
//! so everything is normalized down to trimmed, non-empty lines.

/// Split a raw string into trimmed, non-empty lines.
///
/// Normalization order:
/// 1. drop escaped carriage returns (the two-character sequence `\r`),
/// 2. drop real carriage returns,
/// 3. turn escaped newlines (the two-character sequence `\n`) into real ones,
/// 4. split on real newlines, trim each segment, discard empties.
///
/// Relative order of the surviving lines is preserved. Backslashes that are
/// not part of an escape sequence pass through untouched.
pub fn split_lines(input: &str) -> Vec<String> {
    input
        .replace("\\r", "")
        .replace('\r', "")
        .replace("\\n", "\n")
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(split_lines(""), Vec::<String>::new());
    }

    #[test]
    fn test_single_line_trimmed() {
        assert_eq!(split_lines("\thello world "), ["hello world"]);
    }

    #[test]
    fn test_splits_on_real_newlines() {
        assert_eq!(split_lines("hello\nworld"), ["hello", "world"]);
    }

    #[test]
    fn test_splits_on_escaped_newlines() {
        assert_eq!(split_lines("hello\\nworld"), ["hello", "world"]);
    }

    #[test]
    fn test_discards_carriage_returns_and_blank_lines() {
        assert_eq!(split_lines("hello\r\n\\r\\n\n\rworld"), ["hello", "world"]);
        assert_eq!(split_lines("a\r\nb\r\nc"), ["a", "b", "c"]);
    }

    #[test]
    fn test_inner_tabs_kept_outer_stripped() {
        assert_eq!(
            split_lines("hello \tworld\n\thow are you?"),
            ["hello \tworld", "how are you?"]
        );
    }

    #[test]
    fn test_lone_backslashes_survive() {
        assert_eq!(split_lines("\\hello world\\"), ["\\hello world\\"]);
    }

    #[test]
    fn test_order_preserved() {
        assert_eq!(split_lines("1\n2\n\n3\n4"), ["1", "2", "3", "4"]);
    }
}
