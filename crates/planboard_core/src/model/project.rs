//! Project entity and its normalized status.

use serde::{Deserialize, Serialize};

/// Normalized project lifecycle status.
///
/// The CRM status field is free text; anything outside the known set
/// collapses into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    New,
    InProgress,
    Done,
    Archived,
    Unknown,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::New,
        ProjectStatus::InProgress,
        ProjectStatus::Done,
        ProjectStatus::Archived,
        ProjectStatus::Unknown,
    ];

    /// Normalizes an optional raw status string. Exact, case-sensitive match.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some("new") => Self::New,
            Some("in_progress") => Self::InProgress,
            Some("done") => Self::Done,
            Some("archived") => Self::Archived,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Archived => "archived",
            Self::Unknown => "unknown",
        }
    }
}

/// Canonical project referenced by assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub external_reference: String,
    pub name: String,
    pub status: ProjectStatus,
}
