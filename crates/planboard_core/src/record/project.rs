//! CRM project records.

use crate::record::decode::{DecodeError, ObjectReader, RecordKind};
use serde_json::Value;

/// Decoded project record. `status` is any string here; narrowing into
/// `ProjectStatus` happens in the mapper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRecord {
    pub reference: String,
    pub name: String,
    pub status: Option<String>,
    pub category: Option<String>,
    pub keywords: Vec<String>,
    pub due: Option<String>,
    pub started: Option<String>,
    pub create_date: Option<String>,
    pub modify_date: Option<String>,
}

/// Decodes a project record.
///
/// # Errors
/// - Root is not an object; `self` missing/empty/not a string.
/// - `name` missing or not a string; `status` present but not a string.
pub fn decode_project_record(value: &Value) -> Result<ProjectRecord, DecodeError> {
    let reader = ObjectReader::root(RecordKind::Project, value)?;
    Ok(ProjectRecord {
        reference: reader.required_reference("self")?.to_string(),
        name: reader.required_str("name")?.to_string(),
        status: reader.optional_str("status")?.map(str::to_string),
        category: reader.lenient_str("category"),
        keywords: reader.lenient_string_list("keywords"),
        due: reader.lenient_str("due"),
        started: reader.lenient_str("started"),
        create_date: reader.lenient_str("create_date"),
        modify_date: reader.lenient_str("modify_date"),
    })
}

/// Boolean guard over [`decode_project_record`].
pub fn is_project_record(value: &Value) -> bool {
    decode_project_record(value).is_ok()
}
