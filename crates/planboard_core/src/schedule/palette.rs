//! Project status -> visual category lookup.

use crate::model::project::ProjectStatus;
use std::collections::HashMap;

/// Used when even the `unknown` bucket is missing from a palette.
const LAST_RESORT_CLASS: &str = "bg-base-300";

const DEFAULT_PALETTE: [(ProjectStatus, &str); 5] = [
    (ProjectStatus::New, "bg-primary"),
    (ProjectStatus::InProgress, "bg-secondary"),
    (ProjectStatus::Done, "bg-success"),
    (ProjectStatus::Archived, "bg-neutral"),
    (ProjectStatus::Unknown, LAST_RESORT_CLASS),
];

/// Maps project status to a CSS-class-like color token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPalette {
    classes: HashMap<ProjectStatus, String>,
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self::from_entries(
            DEFAULT_PALETTE
                .iter()
                .map(|(status, class)| (*status, class.to_string())),
        )
    }
}

impl StatusPalette {
    pub fn from_entries(entries: impl IntoIterator<Item = (ProjectStatus, String)>) -> Self {
        Self {
            classes: entries.into_iter().collect(),
        }
    }

    /// Color for `status`, falling back to the `unknown` bucket.
    pub fn color_for(&self, status: ProjectStatus) -> &str {
        self.classes
            .get(&status)
            .or_else(|| self.classes.get(&ProjectStatus::Unknown))
            .map(String::as_str)
            .unwrap_or(LAST_RESORT_CLASS)
    }
}
