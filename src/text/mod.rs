//! Pure text transforms used by the portal UI at render time.

pub mod bytes;
pub mod capitalise;
pub mod date;
pub mod highlight;
pub mod initials;
pub mod lines;
pub mod plural;
pub mod replace;
pub mod truncate;
