//! Display formatting primitives for a genomic data archive portal.
//!
//! The portal frontend renders archive metadata, access requests and
//! verification addresses (IVAs). Everything user-visible goes through a
//! small layer of pure transforms: pluralization, capitalisation,
//! truncation, line splitting, byte sizes, and state-to-label/class
//! mappings. This crate is that layer.
//!
//! Every function here is total and pure: no I/O, no global state, no
//! panics. State lookups resolve through explicit fallbacks instead of
//! erroring, so display code stays resilient to incomplete or evolving
//! enumerations coming from the backend.

pub mod api;
pub mod cli;
pub mod config;
pub mod logger;
pub mod status;
pub mod text;

pub use status::StateDisplay;
pub use text::plural::{plural_count, plural_s};
pub use text::truncate::{DEFAULT_TRUNCATE_LEN, truncate};
