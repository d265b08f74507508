//! Assignment and sync-issue payloads (camelCase wire shape).

use crate::model::assignment::{
    Assignment, AssignmentPeriod, AssignmentSource, AssignmentSyncStatus,
};
use crate::model::sync_issue::{SyncIssue, SyncSource};
use crate::record::decode::{DecodeError, ObjectReader, RecordKind};
use serde_json::Value;

/// Decodes an assignment. All-or-nothing: any mismatch rejects the record.
///
/// Date format and ordering are not checked here; see
/// `AssignmentPeriod::validate`.
pub fn decode_assignment(value: &Value) -> Result<Assignment, DecodeError> {
    let reader = ObjectReader::root(RecordKind::Assignment, value)?;
    let id = reader.required_str("id")?;
    let employee_id = reader.required_str("employeeId")?;
    let project_id = reader.required_str("projectId")?;

    let period = reader.nested("period")?;
    let start_date = period.required_str("startDate")?;
    let end_date = period.required_str("endDate")?;

    let source = reader.required_enum("source", AssignmentSource::parse)?;
    let sync_status = reader.required_enum("syncStatus", AssignmentSyncStatus::parse)?;

    Ok(Assignment {
        id: id.to_string(),
        employee_id: employee_id.to_string(),
        project_id: project_id.to_string(),
        period: AssignmentPeriod::new(start_date, end_date),
        source,
        sync_status,
    })
}

pub fn is_assignment(value: &Value) -> bool {
    decode_assignment(value).is_ok()
}

/// Decodes a sync issue reported by an adapter.
pub fn decode_sync_issue(value: &Value) -> Result<SyncIssue, DecodeError> {
    let reader = ObjectReader::root(RecordKind::SyncIssue, value)?;
    let source = reader.required_enum("source", SyncSource::parse)?;
    Ok(SyncIssue::new(
        source,
        reader.required_str("code")?,
        reader.required_str("message")?,
        reader.required_str("timestamp")?,
    ))
}

pub fn is_sync_issue(value: &Value) -> bool {
    decode_sync_issue(value).is_ok()
}
