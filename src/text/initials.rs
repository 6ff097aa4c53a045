//! Initial letters for avatar badges.

/// Get the initial letters of a person's name.
///
/// Splits on Unicode whitespace. A single name yields one initial, anything
/// longer yields the first and last name's initials. Blank input yields
/// `None` so callers can fall back to a generic avatar.
pub fn initials(name: &str) -> Option<String> {
    let mut parts = name.split_whitespace();
    let first = parts.next()?;
    let last = parts.next_back();

    let mut out = String::new();
    out.extend(first.chars().next()?.to_uppercase());
    if let Some(last) = last {
        // Unreachable '?': split_whitespace never yields empty parts.
        out.extend(last.chars().next()?.to_uppercase());
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input() {
        assert_eq!(initials(""), None);
        assert_eq!(initials(" "), None);
        assert_eq!(initials("   "), None);
    }

    #[test]
    fn test_single_name() {
        assert_eq!(initials("alice").as_deref(), Some("A"));
        assert_eq!(initials(" bob ").as_deref(), Some("B"));
        assert_eq!(initials("  charlie  ").as_deref(), Some("C"));
    }

    #[test]
    fn test_two_names() {
        assert_eq!(initials("alice brown").as_deref(), Some("AB"));
        assert_eq!(initials(" charlie dork ").as_deref(), Some("CD"));
        assert_eq!(initials("  eva   fudd  ").as_deref(), Some("EF"));
    }

    #[test]
    fn test_middle_names_skipped() {
        assert_eq!(initials("alice cleo brown").as_deref(), Some("AB"));
        assert_eq!(initials("goofy a b c d e f g hobbleton").as_deref(), Some("GH"));
    }

    #[test]
    fn test_already_capitalized() {
        assert_eq!(initials("Alice Brown").as_deref(), Some("AB"));
    }

    #[test]
    fn test_exotic_whitespace() {
        assert_eq!(initials("alice\u{a0}brown").as_deref(), Some("AB"));
        assert_eq!(initials("alice\tbrown").as_deref(), Some("AB"));
        assert_eq!(initials("alice \t \u{a0} \r \n brown").as_deref(), Some("AB"));
    }
}
