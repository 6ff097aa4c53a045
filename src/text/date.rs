//! Calendar date display without timezone dependencies.
//!
//! The backend serializes timestamps as ISO 8601 / RFC 3339 strings in UTC.
//! The UI only ever shows the calendar date (or just the year), so a small
//! hand-rolled parser is enough; no timezone conversion is performed and
//! anything unparsable resolves to the empty-string fallback rather than an
//! error.

/// A validated calendar date (the date part of a backend timestamp).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl PortalDate {
    /// Parse from `YYYY-MM-DD`, optionally followed by a `T`-separated time
    /// (`THH:MM:SS` with optional fractional seconds and `Z`/offset suffix).
    ///
    /// The date part is validated including leap years; the time part is
    /// range-checked but otherwise ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();

        // Minimum: "YYYY-MM-DD" (10 chars)
        if bytes.len() < 10 {
            return None;
        }

        let year = parse_u16(&bytes[0..4])?;
        if bytes[4] != b'-' {
            return None;
        }
        let month = parse_u8(&bytes[5..7])?;
        if bytes[7] != b'-' {
            return None;
        }
        let day = parse_u8(&bytes[8..10])?;

        if !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }

        if bytes.len() > 10 {
            validate_time_part(&bytes[10..])?;
        }

        Some(Self { year, month, day })
    }

    /// Format as `YYYY-MM-DD`.
    pub fn to_iso_date(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Convert a backend timestamp to its `YYYY-MM-DD` display form.
///
/// Invalid input yields `""`.
pub fn iso_date(input: &str) -> String {
    PortalDate::parse(input)
        .map(PortalDate::to_iso_date)
        .unwrap_or_default()
}

/// Extract the year of a backend timestamp as a string (e.g. for the
/// copyright footer). Invalid input yields `""`.
pub fn year(input: &str) -> String {
    PortalDate::parse(input)
        .map(|date| date.year.to_string())
        .unwrap_or_default()
}

/// Check `THH:MM:SS[.frac][Z|±HH:MM]` following the date part.
fn validate_time_part(bytes: &[u8]) -> Option<()> {
    // "THH:MM:SS" is 9 bytes
    if bytes.len() < 9 || bytes[0] != b'T' || bytes[3] != b':' || bytes[6] != b':' {
        return None;
    }
    let hour = parse_u8(&bytes[1..3])?;
    let minute = parse_u8(&bytes[4..6])?;
    let second = parse_u8(&bytes[7..9])?;
    if hour > 23 || minute > 59 || second > 59 {
        return None;
    }
    // Fractional seconds and zone suffix are accepted without inspection.
    match bytes.get(9) {
        None | Some(b'.' | b'Z' | b'+' | b'-') => Some(()),
        Some(_) => None,
    }
}

#[inline]
const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[inline]
const fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + u16::from(d);
    }
    Some(result)
}
