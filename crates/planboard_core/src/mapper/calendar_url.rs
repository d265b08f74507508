//! Calendar URL resolution for contacts.
//!
//! # Responsibility
//! - Find the primary (assignment) and absence iCal feeds of a contact.
//!
//! # Invariants
//! - Strategies run in table order; the first `Some` wins.
//! - Within a strategy, entries are scanned in insertion order.
//! - Unresolved lookups return `""`, never an error.

use crate::record::{ContactRecord, ExtraFieldsPayload};
use serde_json::{Map, Value};

/// Label terms identifying the primary assignment calendar.
pub const PRIMARY_CALENDAR_TERMS: &[&str] = &["einsatz", "zuweisung", "assignment", "primary"];

/// Label terms identifying the absence calendar.
pub const ABSENCE_CALENDAR_TERMS: &[&str] = &[
    "abwesenheit",
    "absence",
    "vacation",
    "urlaub",
    "sick",
    "krank",
];

/// Extra-field keys must contain this marker to be considered at all.
const ICAL_KEY_MARKER: &str = "ical";

/// Which calendar feed to look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarKind {
    Primary,
    Absence,
}

impl CalendarKind {
    pub fn default_terms(self) -> &'static [&'static str] {
        match self {
            Self::Primary => PRIMARY_CALENDAR_TERMS,
            Self::Absence => ABSENCE_CALENDAR_TERMS,
        }
    }
}

/// One `extra_fields` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraField {
    pub key: String,
    pub value: Option<String>,
}

/// Parsed `extra_fields`, in payload key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtraFields(Vec<ExtraField>);

impl ExtraFields {
    pub fn iter(&self) -> impl Iterator<Item = &ExtraField> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parses the raw payload. Invalid JSON or a non-matching shape yields an
/// empty mapping.
///
/// Accepted shape: an object whose values are all objects, each with an
/// optional string `value`.
pub fn parse_extra_fields(payload: Option<&ExtraFieldsPayload>) -> ExtraFields {
    match payload {
        None => ExtraFields::default(),
        Some(ExtraFieldsPayload::Inline(map)) => extra_fields_from_map(map),
        Some(ExtraFieldsPayload::Encoded(encoded)) => {
            match serde_json::from_str::<Value>(encoded) {
                Ok(Value::Object(map)) => extra_fields_from_map(&map),
                _ => ExtraFields::default(),
            }
        }
    }
}

fn extra_fields_from_map(map: &Map<String, Value>) -> ExtraFields {
    let mut fields = Vec::with_capacity(map.len());
    for (key, entry) in map {
        let Some(entry) = entry.as_object() else {
            return ExtraFields::default();
        };
        let value = match entry.get("value") {
            None => None,
            Some(Value::String(value)) => Some(value.clone()),
            Some(_) => return ExtraFields::default(),
        };
        fields.push(ExtraField {
            key: key.clone(),
            value,
        });
    }
    ExtraFields(fields)
}

/// Inputs shared by every lookup strategy.
struct CalendarLookup<'a> {
    record: &'a ContactRecord,
    extra_fields: &'a ExtraFields,
}

type CalendarUrlStrategy = fn(&CalendarLookup<'_>, &[String]) -> Option<String>;

/// Lookup strategies in priority order.
const STRATEGIES: [CalendarUrlStrategy; 2] = [url_entry_match, extra_field_match];

/// Resolves a calendar URL with an explicit vocabulary.
///
/// `extra_fields` is passed in pre-parsed so callers resolving several
/// calendars for one contact parse the payload once.
pub fn find_calendar_url(
    record: &ContactRecord,
    extra_fields: &ExtraFields,
    vocabulary: &[String],
) -> String {
    let lookup = CalendarLookup {
        record,
        extra_fields,
    };
    STRATEGIES
        .iter()
        .find_map(|strategy| strategy(&lookup, vocabulary))
        .unwrap_or_default()
}

/// Primary calendar URL using the default vocabulary.
pub fn primary_calendar_url(record: &ContactRecord) -> String {
    calendar_url_with_default_terms(record, CalendarKind::Primary)
}

/// Absence calendar URL using the default vocabulary.
pub fn absence_calendar_url(record: &ContactRecord) -> String {
    calendar_url_with_default_terms(record, CalendarKind::Absence)
}

fn calendar_url_with_default_terms(record: &ContactRecord, kind: CalendarKind) -> String {
    let vocabulary: Vec<String> = kind
        .default_terms()
        .iter()
        .map(|term| term.to_string())
        .collect();
    let extra_fields = parse_extra_fields(record.extra_fields.as_ref());
    find_calendar_url(record, &extra_fields, &vocabulary)
}

fn url_entry_match(lookup: &CalendarLookup<'_>, vocabulary: &[String]) -> Option<String> {
    lookup.record.urls.iter().find_map(|entry| {
        let label = entry.label.as_deref()?;
        let url = entry.url.as_deref()?;
        matches_vocabulary(&label.to_lowercase(), vocabulary).then(|| url.to_string())
    })
}

fn extra_field_match(lookup: &CalendarLookup<'_>, vocabulary: &[String]) -> Option<String> {
    // First qualifying key decides, even when it carries no value.
    let field = lookup.extra_fields.iter().find(|field| {
        let key = field.key.to_lowercase();
        key.contains(ICAL_KEY_MARKER) && matches_vocabulary(&key, vocabulary)
    })?;
    field.value.clone()
}

fn matches_vocabulary(normalized: &str, vocabulary: &[String]) -> bool {
    vocabulary
        .iter()
        .any(|term| normalized.contains(term.to_lowercase().as_str()))
}
