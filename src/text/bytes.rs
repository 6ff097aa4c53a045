//! Human-readable byte sizes for file listings.
//!
//! Uses a binary multiplier (1024) with the familiar decimal-style prefixes.
//! Strictly speaking the binary prefixes (KiB, MiB, ...) would be correct,
//! but most users are not familiar with them.

/// Binary scale step between prefixes.
const MULTIPLIER: f64 = 1024.0;

/// Unit prefixes, one per power of 1024.
const PREFIXES: [&str; 9] = ["", "k", "M", "G", "T", "P", "E", "Z", "Y"];

/// No-break space keeps the value and unit on one line in the UI.
const NBSP: char = '\u{a0}';

/// Convert a byte count to a human-readable size string, e.g. `2.5 MB`.
///
/// Picks the first scale where the value lands in `[0.1, 1000)` and rounds
/// to at most two decimals, printing only the digits needed (`750 B`,
/// `25 kB`, `2.5 MB`). Counts matching no scale (only 0 in practice) are
/// printed as plain bytes.
pub fn format_bytes(bytes: u64) -> String {
    for (index, prefix) in PREFIXES.iter().enumerate() {
        let scaled = bytes as f64 / MULTIPLIER.powi(index as i32);
        if (0.1..1000.0).contains(&scaled) {
            return format!("{}{NBSP}{prefix}B", format_scaled(scaled));
        }
    }
    format!("{bytes}{NBSP}B")
}

/// Round to two decimals and print with minimal digits.
fn format_scaled(value: f64) -> String {
    let hundredths = (value * 100.0).round() as u64;
    if hundredths % 100 == 0 {
        format!("{}", hundredths / 100)
    } else if hundredths % 10 == 0 {
        format!("{}.{}", hundredths / 100, hundredths / 10 % 10)
    } else {
        format!("{}.{:02}", hundredths / 100, hundredths % 100)
    }
}
