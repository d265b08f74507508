//! Employee entity mapped from CRM contact records.

use serde::{Deserialize, Serialize};

/// Label used when a contact carries no usable address.
pub const UNKNOWN_LOCATION: &str = "Unbekannt";

/// Canonical employee shown as one grid row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Trailing numeric segment of `external_reference`, or the full reference.
    pub id: String,
    /// Raw CRM reference (`self`), e.g. `/v1/contacts/1001`.
    pub external_reference: String,
    pub name: String,
    /// CRM keywords, in source order.
    pub skills: Vec<String>,
    pub home_location: String,
    /// Empty string means "no calendar configured".
    pub primary_calendar_url: String,
    /// Empty string means "no calendar configured".
    pub absence_calendar_url: String,
    pub active: bool,
}

impl Employee {
    /// Returns whether an assignment-side employee reference points at this
    /// employee, either by id or by full external reference.
    pub fn is_referenced_by(&self, reference: &str) -> bool {
        let reference = reference.trim();
        reference == self.id || reference == self.external_reference
    }

    pub fn has_primary_calendar(&self) -> bool {
        !self.primary_calendar_url.is_empty()
    }

    pub fn has_absence_calendar(&self) -> bool {
        !self.absence_calendar_url.is_empty()
    }

    /// First character of the display name, used by co-assignee badges.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
