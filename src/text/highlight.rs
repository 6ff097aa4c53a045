//! Search-match highlighting for filter results.
//!
//! Splits a string into contiguous segments marked as highlighted or not,
//! so the UI can wrap matches in an emphasis element. Matching is
//! case-insensitive and literal: the needle is escaped before it reaches
//! the regex engine, so metacharacters in user input cannot change the
//! match semantics.

use regex::RegexBuilder;
use serde::Serialize;

/// One contiguous piece of the input, with its highlight flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSegment {
    pub text: String,
    pub highlighted: bool,
}

impl HighlightSegment {
    fn new(text: &str, highlighted: bool) -> Self {
        Self {
            text: text.to_owned(),
            highlighted,
        }
    }
}

/// Split `text` into segments, highlighting case-insensitive matches of
/// `needle`.
///
/// Empty text yields no segments; an empty needle yields the whole text
/// un-highlighted. The segments concatenate back to the original input in
/// order.
pub fn highlight_matches(text: &str, needle: &str) -> Vec<HighlightSegment> {
    if text.is_empty() {
        return Vec::new();
    }
    if needle.is_empty() {
        return vec![HighlightSegment::new(text, false)];
    }

    // An escaped literal only fails to build on pathological pattern sizes;
    // degrade to un-highlighted output rather than erroring.
    let Ok(re) = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    else {
        return vec![HighlightSegment::new(text, false)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in re.find_iter(text) {
        if found.start() > last {
            segments.push(HighlightSegment::new(&text[last..found.start()], false));
        }
        segments.push(HighlightSegment::new(found.as_str(), true));
        last = found.end();
    }
    if last < text.len() {
        segments.push(HighlightSegment::new(&text[last..], false));
    }
    segments
}
