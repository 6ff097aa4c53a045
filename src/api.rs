//! Backend error payload handling.
//!
//! Failed backend calls deliver a JSON body that may carry a detailed
//! message at several levels of specificity. The UI always shows the most
//! specific one available and never fails on a malformed payload.

use serde::Deserialize;

/// Nested error body as sent by the backend services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// A backend HTTP error payload.
///
/// All fields are optional: other error shapes (network failures, proxy
/// pages) must degrade gracefully to whatever information is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiError {
    pub status: Option<u16>,
    pub status_text: Option<String>,
    pub message: Option<String>,
    pub error: Option<ApiErrorBody>,
}

impl ApiError {
    /// Parse an error payload leniently; malformed JSON yields an empty
    /// payload (and therefore an empty message) instead of an error.
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_default()
    }

    /// The most detailed user-facing message that can be derived.
    ///
    /// Preference order: `error.detail`, `statusText`, `message`, `""`.
    /// Empty strings are skipped like missing fields.
    pub fn message(&self) -> &str {
        self.error
            .as_ref()
            .and_then(|body| non_empty(body.detail.as_deref()))
            .or_else(|| non_empty(self.status_text.as_deref()))
            .or_else(|| non_empty(self.message.as_deref()))
            .unwrap_or("")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
