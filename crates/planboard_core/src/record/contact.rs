//! CRM contact records (the future grid rows).
//!
//! Two naming schemas occur in the wild: split names
//! (`first_name`/`middle_name`/`last_name`) and the display schema
//! (`full_name`/`nickname`). Both are accepted; each name field must be a
//! string when present.

use crate::record::decode::{loose_str, DecodeError, ObjectReader, RecordKind};
use serde_json::{Map, Value};

const NAME_FIELDS: [&str; 5] = [
    "first_name",
    "middle_name",
    "last_name",
    "full_name",
    "nickname",
];

/// Decoded contact record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactRecord {
    /// Stable CRM reference (`self`), never empty.
    pub reference: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub nickname: Option<String>,
    pub category: Option<String>,
    pub keywords: Vec<String>,
    pub urls: Vec<ContactUrl>,
    pub addresses: Vec<ContactAddress>,
    /// Kept undecoded; calendar lookup parses it on demand.
    pub extra_fields: Option<ExtraFieldsPayload>,
}

impl ContactRecord {
    /// Minimal record with only a reference, mostly for tests and fixtures.
    pub fn with_reference(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUrl {
    pub label: Option<String>,
    pub url: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactAddress {
    pub label: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub note: Option<String>,
}

/// `extra_fields` as delivered: an inline object or a JSON-encoded string.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtraFieldsPayload {
    Inline(Map<String, Value>),
    Encoded(String),
}

/// Decodes a contact record.
///
/// # Errors
/// - Root is not an object, or `self` is missing, not a string or empty.
/// - Any name field is present but not a string.
pub fn decode_contact_record(value: &Value) -> Result<ContactRecord, DecodeError> {
    let reader = ObjectReader::root(RecordKind::Contact, value)?;
    let reference = reader.required_reference("self")?.to_string();

    let mut names: [Option<String>; 5] = Default::default();
    for (slot, field) in names.iter_mut().zip(NAME_FIELDS) {
        *slot = reader.optional_str(field)?.map(str::to_string);
    }
    let [first_name, middle_name, last_name, full_name, nickname] = names;

    let urls = reader
        .lenient_object_list("urls")
        .into_iter()
        .map(|entry| ContactUrl {
            label: loose_str(entry, "label"),
            url: loose_str(entry, "url"),
            note: loose_str(entry, "note"),
        })
        .collect();

    let addresses = reader
        .lenient_object_list("addresses")
        .into_iter()
        .map(|entry| ContactAddress {
            label: loose_str(entry, "label"),
            street: loose_str(entry, "street"),
            city: loose_str(entry, "city"),
            state: loose_str(entry, "state"),
            zip: loose_str(entry, "zip"),
            postal_code: loose_str(entry, "postal_code"),
            country: loose_str(entry, "country"),
            note: loose_str(entry, "note"),
        })
        .collect();

    let extra_fields = match reader.raw("extra_fields") {
        Some(Value::Object(map)) => Some(ExtraFieldsPayload::Inline(map.clone())),
        Some(Value::String(encoded)) => Some(ExtraFieldsPayload::Encoded(encoded.clone())),
        _ => None,
    };

    Ok(ContactRecord {
        reference,
        first_name,
        middle_name,
        last_name,
        full_name,
        nickname,
        category: reader.lenient_str("category"),
        keywords: reader.lenient_string_list("keywords"),
        urls,
        addresses,
        extra_fields,
    })
}

/// Boolean guard over [`decode_contact_record`].
pub fn is_contact_record(value: &Value) -> bool {
    decode_contact_record(value).is_ok()
}
