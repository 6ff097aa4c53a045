//! Independent Verification Address (IVA) display tables.
//!
//! An IVA is a contact channel (SMS, fax, postal address, in person) with a
//! verification lifecycle. The backend sends both the state and the type as
//! strings; the tables below map them to what the UI shows.

use serde::{Deserialize, Serialize};

use super::StateDisplay;

/// Verification lifecycle state of an IVA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IvaState {
    Unverified,
    CodeRequested,
    CodeCreated,
    CodeTransmitted,
    Verified,
}

impl IvaState {
    pub const ALL: [IvaState; 5] = [
        Self::Unverified,
        Self::CodeRequested,
        Self::CodeCreated,
        Self::CodeTransmitted,
        Self::Verified,
    ];

    /// Human-readable state name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Unverified => "Unverified",
            Self::CodeRequested => "Code Requested",
            Self::CodeCreated => "Code Created",
            Self::CodeTransmitted => "Code Transmitted",
            Self::Verified => "Verified",
        }
    }

    /// CSS class used when rendering the state.
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Unverified => "text-error",
            Self::CodeRequested => "text-warning",
            Self::CodeCreated => "text-quaternary",
            Self::CodeTransmitted => "text-secondary",
            Self::Verified => "text-success",
        }
    }

    /// Parse the backend's wire form.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|state| state.wire_name() == raw)
    }

    const fn wire_name(&self) -> &'static str {
        match self {
            Self::Unverified => "Unverified",
            Self::CodeRequested => "CodeRequested",
            Self::CodeCreated => "CodeCreated",
            Self::CodeTransmitted => "CodeTransmitted",
            Self::Verified => "Verified",
        }
    }
}

/// Name shown for a missing state.
const FALLBACK_STATE_NAME: &str = "None";

/// Map a raw IVA state to its display name and class.
///
/// Total over arbitrary input: unknown states echo the raw value with the
/// `Unverified` class; an empty state shows the fallback name.
pub fn iva_state_display(raw: &str) -> StateDisplay {
    match IvaState::parse(raw) {
        Some(state) => StateDisplay::new(state.label(), state.css_class()),
        None if raw.is_empty() => {
            StateDisplay::new(FALLBACK_STATE_NAME, IvaState::Unverified.css_class())
        }
        None => StateDisplay::new(raw, IvaState::Unverified.css_class()),
    }
}

/// Contact channel type of an IVA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IvaType {
    Phone,
    Fax,
    PostalAddress,
    InPerson,
}

impl IvaType {
    pub const ALL: [IvaType; 4] = [
        Self::Phone,
        Self::Fax,
        Self::PostalAddress,
        Self::InPerson,
    ];

    /// Human-readable type name (phone numbers are verified via SMS).
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Phone => "SMS",
            Self::Fax => "Fax",
            Self::PostalAddress => "Postal Address",
            Self::InPerson => "In Person",
        }
    }

    /// Material icon name for the type.
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Phone => "smartphone",
            Self::Fax => "fax",
            Self::PostalAddress => "local_post_office",
            Self::InPerson => "handshakes",
        }
    }

    /// Parse the backend's wire form.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.wire_name() == raw)
    }

    const fn wire_name(&self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Fax => "Fax",
            Self::PostalAddress => "PostalAddress",
            Self::InPerson => "InPerson",
        }
    }
}

/// Display name, combined "type: value" line and icon for an IVA type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDisplay {
    pub display: String,
    pub type_and_value: String,
    pub icon: String,
}

/// Map a raw IVA type plus its contact value to display fields.
///
/// Unknown types echo the raw value with empty combined line and icon.
pub fn iva_type_display(raw: &str, value: &str) -> TypeDisplay {
    match IvaType::parse(raw) {
        Some(kind) => TypeDisplay {
            display: kind.label().to_owned(),
            type_and_value: format!("{}: {}", kind.label(), value),
            icon: kind.icon().to_owned(),
        },
        None => TypeDisplay {
            display: raw.to_owned(),
            type_and_value: String::new(),
            icon: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_states() {
        let display = iva_state_display("CodeRequested");
        assert_eq!(display.name, "Code Requested");
        assert_eq!(display.class, "text-warning");

        let display = iva_state_display("Verified");
        assert_eq!(display.name, "Verified");
        assert_eq!(display.class, "text-success");
    }

    #[test]
    fn test_unknown_state_falls_back() {
        let display = iva_state_display("SomethingNew");
        assert_eq!(display.name, "SomethingNew");
        assert_eq!(display.class, "text-error");
    }

    #[test]
    fn test_empty_state_falls_back() {
        let display = iva_state_display("");
        assert_eq!(display.name, "None");
        assert_eq!(display.class, "text-error");
    }

    #[test]
    fn test_every_state_has_label_and_class() {
        for state in IvaState::ALL {
            assert!(!state.label().is_empty());
            assert!(state.css_class().starts_with("text-"));
            assert_eq!(IvaState::parse(state.wire_name()), Some(state));
        }
    }

    #[test]
    fn test_wire_form_round_trip() {
        let json = serde_json::to_string(&IvaState::CodeTransmitted).unwrap();
        assert_eq!(json, "\"CodeTransmitted\"");
        let state: IvaState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, IvaState::CodeTransmitted);
    }

    #[test]
    fn test_phone_displays_as_sms() {
        let display = iva_type_display("Phone", "+441234567890004");
        assert_eq!(display.display, "SMS");
        assert_eq!(display.type_and_value, "SMS: +441234567890004");
        assert_eq!(display.icon, "smartphone");
    }

    #[test]
    fn test_postal_address_type() {
        let display = iva_type_display("PostalAddress", "c/o Data Steward");
        assert_eq!(display.display, "Postal Address");
        assert_eq!(display.type_and_value, "Postal Address: c/o Data Steward");
        assert_eq!(display.icon, "local_post_office");
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let display = iva_type_display("CarrierPigeon", "roof");
        assert_eq!(display.display, "CarrierPigeon");
        assert_eq!(display.type_and_value, "");
        assert_eq!(display.icon, "");
    }
}
