//! Core domain logic for Planboard, a week-based staffing grid.
//! This crate is the single source of truth for planning invariants.

pub mod config;
pub mod logging;
pub mod mapper;
pub mod model;
pub mod record;
pub mod schedule;
pub mod service;

pub use config::{CalendarVocabulary, ConfigError, PlannerConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use mapper::{extract_reference_id, map_contact_to_employee, map_project_record_to_project};
pub use model::assignment::{
    Assignment, AssignmentPeriod, AssignmentSource, AssignmentSyncStatus, PeriodError,
};
pub use model::employee::Employee;
pub use model::project::{Project, ProjectStatus};
pub use model::sync_issue::{SyncIssue, SyncSource};
pub use model::work_item::{DayIndex, WorkItem, WorkItemView};
pub use record::{DecodeError, DecodeErrorKind, RecordKind};
pub use schedule::board::{EmployeeDirectory, PlanningBoard};
pub use schedule::continuity::{analyze_continuity, ContinuityHints};
pub use schedule::week::{resolve_week_days, WeekDay};
pub use service::grid_service::{GridError, WeekGrid, WeekGridService};
pub use service::import_service::{ImportOutcome, ImportStats, SnapshotImporter};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
