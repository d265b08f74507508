//! Contact -> Employee mapping.

use crate::mapper::calendar_url::{
    find_calendar_url, parse_extra_fields, ABSENCE_CALENDAR_TERMS, PRIMARY_CALENDAR_TERMS,
};
use crate::mapper::reference::extract_reference_id;
use crate::model::employee::{Employee, UNKNOWN_LOCATION};
use crate::record::{ContactAddress, ContactRecord};

/// Tunables for contact mapping, usually taken from `PlannerConfig`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperSettings {
    pub primary_calendar_terms: Vec<String>,
    pub absence_calendar_terms: Vec<String>,
    pub unknown_location_label: String,
}

impl Default for MapperSettings {
    fn default() -> Self {
        Self {
            primary_calendar_terms: to_owned_terms(PRIMARY_CALENDAR_TERMS),
            absence_calendar_terms: to_owned_terms(ABSENCE_CALENDAR_TERMS),
            unknown_location_label: UNKNOWN_LOCATION.to_string(),
        }
    }
}

fn to_owned_terms(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|term| term.to_string()).collect()
}

/// Maps a decoded contact using default settings.
pub fn map_contact_to_employee(record: &ContactRecord) -> Employee {
    map_contact_to_employee_with(record, &MapperSettings::default())
}

/// Maps a decoded contact.
///
/// # Contract
/// - `id` is the reference's trailing numeric segment, else the reference.
/// - `name` prefers split name parts, then nickname/full name, then `self`.
/// - Calendar URLs are `""` when unresolved.
/// - `active` is always `true`; the CRM has no deactivation signal.
pub fn map_contact_to_employee_with(record: &ContactRecord, settings: &MapperSettings) -> Employee {
    let extra_fields = parse_extra_fields(record.extra_fields.as_ref());

    Employee {
        id: extract_reference_id(&record.reference),
        external_reference: record.reference.clone(),
        name: employee_name(record),
        skills: record.keywords.clone(),
        home_location: home_location(primary_address(record), &settings.unknown_location_label),
        primary_calendar_url: find_calendar_url(
            record,
            &extra_fields,
            &settings.primary_calendar_terms,
        ),
        absence_calendar_url: find_calendar_url(
            record,
            &extra_fields,
            &settings.absence_calendar_terms,
        ),
        active: true,
    }
}

/// Display name for the `nickname`/`full_name` schema: nickname, else full
/// name, else `""`.
pub fn contact_display_name(record: &ContactRecord) -> String {
    [record.nickname.as_deref(), record.full_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// First address entry, as delivered.
pub fn primary_address(record: &ContactRecord) -> Option<&ContactAddress> {
    record.addresses.first()
}

fn employee_name(record: &ContactRecord) -> String {
    let split = join_non_empty(
        [
            record.first_name.as_deref(),
            record.middle_name.as_deref(),
            record.last_name.as_deref(),
        ],
        " ",
    );
    if !split.is_empty() {
        return split;
    }

    let display = contact_display_name(record);
    if !display.is_empty() {
        return display;
    }

    record.reference.clone()
}

fn home_location(address: Option<&ContactAddress>, unknown_label: &str) -> String {
    let Some(address) = address else {
        return unknown_label.to_string();
    };
    let location = join_non_empty(
        [
            address.city.as_deref(),
            address.state.as_deref(),
            address.country.as_deref(),
        ],
        ", ",
    );
    if location.is_empty() {
        unknown_label.to_string()
    } else {
        location
    }
}

fn join_non_empty<'a>(parts: impl IntoIterator<Item = Option<&'a str>>, separator: &str) -> String {
    parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}
