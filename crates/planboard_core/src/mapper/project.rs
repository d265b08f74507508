//! Project record -> Project mapping.

use crate::mapper::reference::extract_reference_id;
use crate::model::project::{Project, ProjectStatus};
use crate::record::ProjectRecord;

/// Maps a decoded project record. Unrecognized or absent status becomes
/// `ProjectStatus::Unknown`.
pub fn map_project_record_to_project(record: &ProjectRecord) -> Project {
    Project {
        id: extract_reference_id(&record.reference),
        external_reference: record.reference.clone(),
        name: record.name.clone(),
        status: ProjectStatus::from_raw(record.status.as_deref()),
    }
}
