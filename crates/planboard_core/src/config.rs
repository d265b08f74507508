//! Planner configuration.
//!
//! # Responsibility
//! - Declare the tunables of mapping and grid rendering as data.
//! - Load them from JSON and reject inconsistent declarations up front.
//!
//! # Invariants
//! - Every field has a default; an empty JSON object is a valid config.
//! - A validated config always has an `unknown` palette bucket, a display
//!   limit >= 1 and non-empty calendar vocabularies.

use crate::mapper::calendar_url::{ABSENCE_CALENDAR_TERMS, PRIMARY_CALENDAR_TERMS};
use crate::mapper::contact::MapperSettings;
use crate::model::employee::UNKNOWN_LOCATION;
use crate::model::project::ProjectStatus;
use crate::schedule::continuity::DEFAULT_CO_ASSIGNEE_LIMIT;
use crate::schedule::palette::StatusPalette;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Label vocabularies for calendar URL lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarVocabulary {
    pub primary: Vec<String>,
    pub absence: Vec<String>,
}

impl Default for CalendarVocabulary {
    fn default() -> Self {
        Self {
            primary: PRIMARY_CALENDAR_TERMS.iter().map(|t| t.to_string()).collect(),
            absence: ABSENCE_CALENDAR_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Top-level planner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Project status (`new`, `in_progress`, ...) -> color token. Replaces
    /// the default palette as a whole.
    pub status_palette: BTreeMap<String, String>,
    pub co_assignee_display_limit: usize,
    pub calendar_vocabulary: CalendarVocabulary,
    pub unknown_location_label: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let palette = StatusPalette::default();
        Self {
            status_palette: ProjectStatus::ALL
                .iter()
                .map(|status| {
                    (
                        status.as_str().to_string(),
                        palette.color_for(*status).to_string(),
                    )
                })
                .collect(),
            co_assignee_display_limit: DEFAULT_CO_ASSIGNEE_LIMIT,
            calendar_vocabulary: CalendarVocabulary::default(),
            unknown_location_label: UNKNOWN_LOCATION.to_string(),
        }
    }
}

impl PlannerConfig {
    /// Parses and validates a JSON config document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Validates declaration-level invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for key in self.status_palette.keys() {
            if parse_status_key(key).is_none() {
                return Err(ConfigError::UnknownStatus(key.clone()));
            }
        }
        if !self
            .status_palette
            .contains_key(ProjectStatus::Unknown.as_str())
        {
            return Err(ConfigError::MissingUnknownBucket);
        }
        if self.co_assignee_display_limit == 0 {
            return Err(ConfigError::InvalidDisplayLimit);
        }
        if is_blank_vocabulary(&self.calendar_vocabulary.primary) {
            return Err(ConfigError::EmptyVocabulary("primary"));
        }
        if is_blank_vocabulary(&self.calendar_vocabulary.absence) {
            return Err(ConfigError::EmptyVocabulary("absence"));
        }
        if self.unknown_location_label.trim().is_empty() {
            return Err(ConfigError::EmptyLocationLabel);
        }
        Ok(())
    }

    /// Palette built from `status_palette`; unknown keys are ignored.
    pub fn palette(&self) -> StatusPalette {
        StatusPalette::from_entries(
            self.status_palette
                .iter()
                .filter_map(|(key, class)| parse_status_key(key).map(|status| (status, class.clone()))),
        )
    }

    pub fn mapper_settings(&self) -> MapperSettings {
        MapperSettings {
            primary_calendar_terms: normalize_terms(&self.calendar_vocabulary.primary),
            absence_calendar_terms: normalize_terms(&self.calendar_vocabulary.absence),
            unknown_location_label: self.unknown_location_label.clone(),
        }
    }
}

fn parse_status_key(key: &str) -> Option<ProjectStatus> {
    ProjectStatus::ALL
        .into_iter()
        .find(|status| status.as_str() == key)
}

fn is_blank_vocabulary(terms: &[String]) -> bool {
    terms.iter().all(|term| term.trim().is_empty())
}

fn normalize_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Config loading/validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    UnknownStatus(String),
    MissingUnknownBucket,
    InvalidDisplayLimit,
    EmptyVocabulary(&'static str),
    EmptyLocationLabel,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::UnknownStatus(key) => write!(f, "statusPalette has unknown status `{key}`"),
            Self::MissingUnknownBucket => {
                write!(f, "statusPalette must define the `unknown` bucket")
            }
            Self::InvalidDisplayLimit => write!(f, "coAssigneeDisplayLimit must be >= 1"),
            Self::EmptyVocabulary(kind) => {
                write!(f, "calendarVocabulary.{kind} must contain at least one term")
            }
            Self::EmptyLocationLabel => write!(f, "unknownLocationLabel must not be blank"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}
