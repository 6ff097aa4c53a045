//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 datasets)
/// - `plural_s(1)` -> `""` (1 dataset)
/// - `plural_s(5)` -> `"s"` (5 datasets)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "study")` -> `"0 studys"` (caller picks a regular noun)
/// - `plural_count(1, "sample")` -> `"1 sample"`
/// - `plural_count(5, "sample")` -> `"5 samples"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
