//! State-to-label/class mappings for portal entities.
//!
//! Every mapper here is a total function: unknown or empty raw values from
//! the backend resolve through a documented fallback instead of erroring.
//! Display code must keep working while the backend's enumerations evolve.

pub mod access;
pub mod account;
pub mod iva;

use serde::Serialize;

/// Display name and CSS class for an enumerated state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateDisplay {
    pub name: String,
    pub class: String,
}

impl StateDisplay {
    pub(crate) fn new(name: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: class.into(),
        }
    }
}
