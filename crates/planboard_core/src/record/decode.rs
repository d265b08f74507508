//! Shared decode plumbing for record guards.

use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// External record family being decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Contact,
    Project,
    Assignment,
    SyncIssue,
}

impl RecordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Project => "project",
            Self::Assignment => "assignment",
            Self::SyncIssue => "sync_issue",
        }
    }
}

/// Why a field failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The record (or nested field) is not a JSON object.
    NotAnObject { found: &'static str },
    /// A required field is absent.
    Missing,
    /// The field exists but has the wrong JSON type.
    WrongType {
        expected: &'static str,
        found: &'static str,
    },
    /// The field is a string outside its recognized value set.
    UnrecognizedValue(String),
    /// The field is the empty string.
    Empty,
}

/// Structured decode failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub record: RecordKind,
    /// Dotted field path; empty for the record root.
    pub field: String,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub(crate) fn new(record: RecordKind, field: impl Into<String>, kind: DecodeErrorKind) -> Self {
        Self {
            record,
            field: field.into(),
            kind,
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let record = self.record.as_str();
        let field = if self.field.is_empty() {
            "<root>"
        } else {
            self.field.as_str()
        };
        match &self.kind {
            DecodeErrorKind::NotAnObject { found } => {
                write!(f, "{record} record field `{field}` must be an object, found {found}")
            }
            DecodeErrorKind::Missing => {
                write!(f, "{record} record is missing required field `{field}`")
            }
            DecodeErrorKind::WrongType { expected, found } => write!(
                f,
                "{record} record field `{field}` must be {expected}, found {found}"
            ),
            DecodeErrorKind::UnrecognizedValue(value) => write!(
                f,
                "{record} record field `{field}` has unrecognized value `{value}`"
            ),
            DecodeErrorKind::Empty => {
                write!(f, "{record} record field `{field}` must not be empty")
            }
        }
    }
}

impl Error for DecodeError {}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Field accessor over one JSON object with path-aware errors.
pub(crate) struct ObjectReader<'a> {
    record: RecordKind,
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> ObjectReader<'a> {
    /// Opens the record root.
    pub(crate) fn root(record: RecordKind, value: &'a Value) -> Result<Self, DecodeError> {
        Self::open(record, String::new(), value)
    }

    /// Opens a required nested object field.
    pub(crate) fn nested(&self, field: &str) -> Result<ObjectReader<'a>, DecodeError> {
        let path = self.path_of(field);
        match self.map.get(field) {
            Some(value) => Self::open(self.record, path, value),
            None => Err(DecodeError::new(self.record, path, DecodeErrorKind::Missing)),
        }
    }

    pub(crate) fn required_str(&self, field: &str) -> Result<&'a str, DecodeError> {
        match self.map.get(field) {
            Some(Value::String(value)) => Ok(value.as_str()),
            Some(other) => Err(self.wrong_type(field, "a string", other)),
            None => Err(DecodeError::new(
                self.record,
                self.path_of(field),
                DecodeErrorKind::Missing,
            )),
        }
    }

    /// Required non-empty string. Whitespace is kept as-is.
    pub(crate) fn required_reference(&self, field: &str) -> Result<&'a str, DecodeError> {
        let value = self.required_str(field)?;
        if value.is_empty() {
            return Err(DecodeError::new(
                self.record,
                self.path_of(field),
                DecodeErrorKind::Empty,
            ));
        }
        Ok(value)
    }

    /// Absent -> `None`; present must be a string (`null` included).
    pub(crate) fn optional_str(&self, field: &str) -> Result<Option<&'a str>, DecodeError> {
        match self.map.get(field) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.as_str())),
            Some(other) => Err(self.wrong_type(field, "a string", other)),
        }
    }

    /// Required string narrowed through `parse`.
    pub(crate) fn required_enum<T>(
        &self,
        field: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, DecodeError> {
        let raw = self.required_str(field)?;
        parse(raw).ok_or_else(|| {
            DecodeError::new(
                self.record,
                self.path_of(field),
                DecodeErrorKind::UnrecognizedValue(raw.to_string()),
            )
        })
    }

    /// String value if present and a string; anything else reads as absent.
    pub(crate) fn lenient_str(&self, field: &str) -> Option<String> {
        self.map
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// String entries of an array field; non-string entries are skipped.
    pub(crate) fn lenient_string_list(&self, field: &str) -> Vec<String> {
        self.lenient_objects_or_values(field)
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    }

    /// Object entries of an array field; non-object entries are skipped.
    pub(crate) fn lenient_object_list(&self, field: &str) -> Vec<&'a Map<String, Value>> {
        self.lenient_objects_or_values(field)
            .filter_map(Value::as_object)
            .collect()
    }

    pub(crate) fn raw(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field)
    }

    fn lenient_objects_or_values(&self, field: &str) -> impl Iterator<Item = &'a Value> {
        self.map
            .get(field)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
    }

    fn open(record: RecordKind, path: String, value: &'a Value) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self { record, path, map }),
            other => Err(DecodeError::new(
                record,
                path,
                DecodeErrorKind::NotAnObject {
                    found: json_type_name(other),
                },
            )),
        }
    }

    fn path_of(&self, field: &str) -> String {
        if self.path.is_empty() {
            field.to_string()
        } else {
            format!("{}.{field}", self.path)
        }
    }

    fn wrong_type(&self, field: &str, expected: &'static str, found: &Value) -> DecodeError {
        DecodeError::new(
            self.record,
            self.path_of(field),
            DecodeErrorKind::WrongType {
                expected,
                found: json_type_name(found),
            },
        )
    }
}

/// Reads an optional string out of a loosely-shaped nested object.
pub(crate) fn loose_str(map: &Map<String, Value>, field: &str) -> Option<String> {
    map.get(field).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::{DecodeErrorKind, ObjectReader, RecordKind};
    use serde_json::json;

    #[test]
    fn root_rejects_non_objects() {
        let value = json!(["not", "an", "object"]);
        let err = ObjectReader::root(RecordKind::Project, &value)
            .err()
            .expect("arrays are not records");
        assert_eq!(err.kind, DecodeErrorKind::NotAnObject { found: "array" });
        assert_eq!(err.field, "");
    }

    #[test]
    fn nested_paths_are_dotted() {
        let value = json!({ "period": { "startDate": 5 } });
        let reader = ObjectReader::root(RecordKind::Assignment, &value).unwrap();
        let period = reader.nested("period").unwrap();
        let err = period.required_str("startDate").unwrap_err();
        assert_eq!(err.field, "period.startDate");
        assert_eq!(
            err.kind,
            DecodeErrorKind::WrongType {
                expected: "a string",
                found: "number"
            }
        );
    }

    #[test]
    fn optional_str_rejects_null() {
        let value = json!({ "status": null });
        let reader = ObjectReader::root(RecordKind::Project, &value).unwrap();
        assert!(reader.optional_str("status").is_err());
        assert_eq!(reader.optional_str("missing").unwrap(), None);
    }

    #[test]
    fn lenient_string_list_skips_non_strings() {
        let value = json!({ "keywords": ["Backend", 7, null, "API"] });
        let reader = ObjectReader::root(RecordKind::Contact, &value).unwrap();
        assert_eq!(
            reader.lenient_string_list("keywords"),
            vec!["Backend".to_string(), "API".to_string()]
        );
        assert!(reader.lenient_string_list("absent").is_empty());
    }

    #[test]
    fn display_names_record_and_field() {
        let value = json!({});
        let reader = ObjectReader::root(RecordKind::Contact, &value).unwrap();
        let err = reader.required_str("self").unwrap_err();
        assert_eq!(
            err.to_string(),
            "contact record is missing required field `self`"
        );
    }
}
