//! Access request status display tables.

use serde::{Deserialize, Serialize};

/// Status of a dataset access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRequestStatus {
    Allowed,
    Denied,
    Pending,
}

impl AccessRequestStatus {
    pub const ALL: [AccessRequestStatus; 3] = [Self::Allowed, Self::Denied, Self::Pending];

    /// Human-readable status name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Allowed => "Allowed",
            Self::Denied => "Denied",
            Self::Pending => "Pending",
        }
    }

    /// CSS class used when rendering the status.
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Allowed => "text-success",
            Self::Denied => "text-error",
            Self::Pending => "text-info",
        }
    }

    /// Parse the backend's lowercase wire form.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "allowed" => Some(Self::Allowed),
            "denied" => Some(Self::Denied),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

/// Map a raw access request status to its CSS class.
///
/// Unknown statuses get no class at all; plain text is the safe rendering
/// for a status the UI does not know yet.
pub fn access_request_status_class(raw: &str) -> &'static str {
    match AccessRequestStatus::parse(raw) {
        Some(status) => status.css_class(),
        None => "",
    }
}
