//! User account status display tables.

use serde::{Deserialize, Serialize};

/// Binary account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    /// CSS class used when rendering the status.
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Active => "text-success",
            Self::Inactive => "text-error",
        }
    }

    /// Parse the backend's lowercase wire form.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// Map a raw account status to its CSS class.
///
/// Anything unrecognized is rendered like an inactive account.
pub fn account_status_class(raw: &str) -> &'static str {
    AccountStatus::parse(raw)
        .unwrap_or(AccountStatus::Inactive)
        .css_class()
}
