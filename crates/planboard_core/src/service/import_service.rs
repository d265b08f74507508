//! Snapshot import use-case.
//!
//! # Responsibility
//! - Decode every record of a raw snapshot through the record guards.
//! - Map accepted records and assemble one `PlanningBoard`.
//! - Report each rejected record as a `SyncIssue` instead of failing.
//!
//! # Invariants
//! - Accepted records keep their snapshot order.
//! - Duplicate ids keep the first occurrence.
//! - The observation time is injected; no clock reads here.
//!
//! Snapshot shape:
//! `{ "contacts": [..], "projects": [..], "assignments": [..], "syncIssues": [..] }`.
//! Missing sections read as empty.

use crate::config::PlannerConfig;
use crate::mapper::contact::{map_contact_to_employee_with, MapperSettings};
use crate::mapper::project::map_project_record_to_project;
use crate::model::assignment::Assignment;
use crate::model::employee::Employee;
use crate::model::project::Project;
use crate::model::sync_issue::{SyncIssue, SyncSource};
use crate::record::{
    decode_assignment, decode_contact_record, decode_project_record, decode_sync_issue,
    DecodeError,
};
use crate::schedule::board::{EmployeeDirectory, PlanningBoard};
use crate::schedule::palette::StatusPalette;
use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::time::Instant;

const SECTION_CONTACTS: &str = "contacts";
const SECTION_PROJECTS: &str = "projects";
const SECTION_ASSIGNMENTS: &str = "assignments";
const SECTION_SYNC_ISSUES: &str = "syncIssues";

/// Per-section accept/reject counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionStats {
    pub accepted: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportStats {
    pub contacts: SectionStats,
    pub projects: SectionStats,
    pub assignments: SectionStats,
    pub sync_issues: SectionStats,
}

/// Result of one import run.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub board: PlanningBoard,
    /// Reported issues from the snapshot first, then import rejections.
    pub issues: Vec<SyncIssue>,
    pub stats: ImportStats,
}

/// Builds planning boards from raw snapshots.
#[derive(Debug, Clone)]
pub struct SnapshotImporter {
    settings: MapperSettings,
    palette: StatusPalette,
    /// Source stamped on issues about CRM records.
    crm_source: SyncSource,
}

impl Default for SnapshotImporter {
    fn default() -> Self {
        Self {
            settings: MapperSettings::default(),
            palette: StatusPalette::default(),
            crm_source: SyncSource::Daylite,
        }
    }
}

impl SnapshotImporter {
    pub fn new(config: &PlannerConfig) -> Self {
        Self {
            settings: config.mapper_settings(),
            palette: config.palette(),
            crm_source: SyncSource::Daylite,
        }
    }

    /// Imports a snapshot observed at `observed_at`.
    pub fn import(&self, snapshot: &Value, observed_at: DateTime<Utc>) -> ImportOutcome {
        let started_at = Instant::now();
        let mut run = ImportRun {
            timestamp: observed_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            issues: Vec::new(),
            stats: ImportStats::default(),
        };

        if !snapshot.is_object() {
            warn!("event=snapshot_import module=service status=error error_code=snapshot_not_object");
            run.push_issue(
                SyncSource::Manual,
                "invalid_snapshot",
                "snapshot must be a JSON object".to_string(),
            );
            return run.finish(PlanningBoard::with_palette(
                Vec::new(),
                Vec::new(),
                Vec::new(),
                self.palette.clone(),
            ));
        }

        let reported = run.decode_section(
            snapshot,
            SECTION_SYNC_ISSUES,
            SyncSource::Manual,
            "invalid_sync_issue_record",
            decode_sync_issue,
        );
        run.stats.sync_issues.accepted = reported.len();
        // Reported issues go first so callers see upstream problems before ours.
        run.issues.splice(0..0, reported);

        let employees = self.import_contacts(snapshot, &mut run);
        let projects = self.import_projects(snapshot, &mut run);
        let assignments = import_assignments(snapshot, &mut run);

        let board = PlanningBoard::with_palette(employees, projects, assignments, self.palette.clone());
        log_dangling_references(&board);

        info!(
            "event=snapshot_import module=service status=ok duration_ms={} employees={} projects={} assignments={} issues={}",
            started_at.elapsed().as_millis(),
            board.employees().len(),
            board.projects().len(),
            board.assignments().len(),
            run.issues.len()
        );
        run.finish(board)
    }

    fn import_contacts(&self, snapshot: &Value, run: &mut ImportRun) -> Vec<Employee> {
        let records = run.decode_section(
            snapshot,
            SECTION_CONTACTS,
            self.crm_source,
            "invalid_contact_record",
            decode_contact_record,
        );
        let mut seen = HashSet::new();
        let mut employees = Vec::with_capacity(records.len());
        for record in records {
            let employee = map_contact_to_employee_with(&record, &self.settings);
            if !seen.insert(employee.id.clone()) {
                run.reject_duplicate(self.crm_source, "duplicate_employee_id", &employee.id);
                run.stats.contacts.rejected += 1;
                continue;
            }
            employees.push(employee);
        }
        run.stats.contacts.accepted = employees.len();
        employees
    }

    fn import_projects(&self, snapshot: &Value, run: &mut ImportRun) -> Vec<Project> {
        let records = run.decode_section(
            snapshot,
            SECTION_PROJECTS,
            self.crm_source,
            "invalid_project_record",
            decode_project_record,
        );
        let mut seen = HashSet::new();
        let mut projects = Vec::with_capacity(records.len());
        for record in records {
            let project = map_project_record_to_project(&record);
            if !seen.insert(project.id.clone()) {
                run.reject_duplicate(self.crm_source, "duplicate_project_id", &project.id);
                run.stats.projects.rejected += 1;
                continue;
            }
            projects.push(project);
        }
        run.stats.projects.accepted = projects.len();
        projects
    }
}

fn import_assignments(snapshot: &Value, run: &mut ImportRun) -> Vec<Assignment> {
    let decoded = run.decode_section(
        snapshot,
        SECTION_ASSIGNMENTS,
        SyncSource::Manual,
        "invalid_assignment_record",
        decode_assignment,
    );
    let mut seen = HashSet::new();
    let mut assignments = Vec::with_capacity(decoded.len());
    for assignment in decoded {
        let source = sync_source_of(&assignment);
        if let Err(err) = assignment.validate() {
            debug!(
                "event=record_rejected module=service section=assignments id={} error_code=invalid_assignment_period",
                assignment.id
            );
            run.push_issue(
                source,
                "invalid_assignment_period",
                format!("assignment `{}`: {err}", assignment.id),
            );
            run.stats.assignments.rejected += 1;
            continue;
        }
        if !seen.insert(assignment.id.clone()) {
            run.reject_duplicate(source, "duplicate_assignment_id", &assignment.id);
            run.stats.assignments.rejected += 1;
            continue;
        }
        assignments.push(assignment);
    }
    run.stats.assignments.accepted = assignments.len();
    assignments
}

fn sync_source_of(assignment: &Assignment) -> SyncSource {
    SyncSource::parse(assignment.source.as_str()).unwrap_or(SyncSource::Manual)
}

fn log_dangling_references(board: &PlanningBoard) {
    let unresolved_employees = board
        .assignments()
        .iter()
        .filter(|assignment| board.find_employee(&assignment.employee_id).is_none())
        .count();
    let unresolved_projects = board
        .assignments()
        .iter()
        .filter(|assignment| board.find_project(&assignment.project_id).is_none())
        .count();
    if unresolved_employees > 0 || unresolved_projects > 0 {
        warn!(
            "event=dangling_references module=service status=degraded employees={} projects={}",
            unresolved_employees, unresolved_projects
        );
    }
}

/// Mutable bookkeeping for one import call.
struct ImportRun {
    timestamp: String,
    issues: Vec<SyncIssue>,
    stats: ImportStats,
}

impl ImportRun {
    fn decode_section<T>(
        &mut self,
        snapshot: &Value,
        section: &'static str,
        source: SyncSource,
        code: &'static str,
        decode: impl Fn(&Value) -> Result<T, DecodeError>,
    ) -> Vec<T> {
        let entries = match snapshot.get(section) {
            None => return Vec::new(),
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                warn!(
                    "event=snapshot_import module=service status=degraded section={} error_code=section_not_array",
                    section
                );
                self.push_issue(
                    source,
                    "invalid_snapshot_section",
                    format!("snapshot section `{section}` must be an array"),
                );
                return Vec::new();
            }
        };

        let mut decoded = Vec::with_capacity(entries.len());
        let mut rejected = 0;
        for (index, entry) in entries.iter().enumerate() {
            match decode(entry) {
                Ok(record) => decoded.push(record),
                Err(err) => {
                    debug!(
                        "event=record_rejected module=service section={} index={} field={} error_code={}",
                        section, index, err.field, code
                    );
                    self.push_issue(source, code, format!("{section}[{index}]: {err}"));
                    rejected += 1;
                }
            }
        }
        self.section_stats(section).rejected += rejected;
        decoded
    }

    fn reject_duplicate(&mut self, source: SyncSource, code: &'static str, id: &str) {
        debug!(
            "event=record_rejected module=service id={} error_code={}",
            id, code
        );
        self.push_issue(source, code, format!("id `{id}` appears more than once; keeping the first"));
    }

    fn push_issue(&mut self, source: SyncSource, code: &str, message: String) {
        self.issues
            .push(SyncIssue::new(source, code, message, self.timestamp.clone()));
    }

    fn section_stats(&mut self, section: &str) -> &mut SectionStats {
        match section {
            SECTION_CONTACTS => &mut self.stats.contacts,
            SECTION_PROJECTS => &mut self.stats.projects,
            SECTION_ASSIGNMENTS => &mut self.stats.assignments,
            _ => &mut self.stats.sync_issues,
        }
    }

    fn finish(self, board: PlanningBoard) -> ImportOutcome {
        ImportOutcome {
            board,
            issues: self.issues,
            stats: self.stats,
        }
    }
}
