//! Assignment model linking one employee to one project over a date range.
//!
//! # Responsibility
//! - Define the assignment wire shape (`employeeId`, `period.startDate`, ...).
//! - Provide the inclusive day-coverage check used by the cell resolver.
//!
//! # Invariants
//! - Period bounds are `YYYY-MM-DD` strings; `start_date <= end_date` once
//!   `AssignmentPeriod::validate` has passed.
//! - Coverage compares zero-padded ISO strings, which orders like dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ISO_DAY_FORMAT: &str = "%Y-%m-%d";
const ISO_DAY_LEN: usize = 10;

/// Origin system of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentSource {
    Manual,
    Daylite,
    Planradar,
    Ical,
}

impl AssignmentSource {
    pub const ALL: [AssignmentSource; 4] = [
        AssignmentSource::Manual,
        AssignmentSource::Daylite,
        AssignmentSource::Planradar,
        AssignmentSource::Ical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Daylite => "daylite",
            Self::Planradar => "planradar",
            Self::Ical => "ical",
        }
    }

    /// Exact, case-sensitive match against the wire value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.as_str() == value)
    }
}

/// Synchronization state of an assignment against its origin system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentSyncStatus {
    Pending,
    Synced,
    Failed,
}

impl AssignmentSyncStatus {
    pub const ALL: [AssignmentSyncStatus; 3] = [
        AssignmentSyncStatus::Pending,
        AssignmentSyncStatus::Synced,
        AssignmentSyncStatus::Failed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Synced => "synced",
            Self::Failed => "failed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// Inclusive calendar-day range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPeriod {
    pub start_date: String,
    pub end_date: String,
}

impl AssignmentPeriod {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Single-day period.
    pub fn single_day(day: NaiveDate) -> Self {
        let iso = format_iso_day(day);
        Self::new(iso.clone(), iso)
    }

    /// Checks date format and ordering.
    ///
    /// # Errors
    /// - `PeriodError::InvalidDate` when a bound is not a calendar date.
    /// - `PeriodError::Reversed` when `end_date` precedes `start_date`.
    pub fn validate(&self) -> Result<(), PeriodError> {
        let start = parse_iso_day(&self.start_date).ok_or_else(|| PeriodError::InvalidDate {
            field: "startDate",
            value: self.start_date.clone(),
        })?;
        let end = parse_iso_day(&self.end_date).ok_or_else(|| PeriodError::InvalidDate {
            field: "endDate",
            value: self.end_date.clone(),
        })?;
        if end < start {
            return Err(PeriodError::Reversed {
                start: self.start_date.clone(),
                end: self.end_date.clone(),
            });
        }
        Ok(())
    }

    /// Returns whether `day` falls inside the inclusive range.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.covers_iso_day(&format_iso_day(day))
    }

    /// String form of [`AssignmentPeriod::covers`]; both sides are cut down
    /// to their `YYYY-MM-DD` prefix before comparing.
    pub fn covers_iso_day(&self, iso_day: &str) -> bool {
        let day = normalize_iso_day(iso_day);
        normalize_iso_day(&self.start_date) <= day && day <= normalize_iso_day(&self.end_date)
    }
}

/// Period validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    InvalidDate { field: &'static str, value: String },
    Reversed { start: String, end: String },
}

impl Display for PeriodError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { field, value } => {
                write!(f, "period {field} is not a YYYY-MM-DD date: `{value}`")
            }
            Self::Reversed { start, end } => {
                write!(f, "period endDate ({end}) must be >= startDate ({start})")
            }
        }
    }
}

impl Error for PeriodError {}

/// One employee booked on one project for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: String,
    /// Employee id or full contact reference.
    pub employee_id: String,
    /// Project id or full project reference.
    pub project_id: String,
    pub period: AssignmentPeriod,
    pub source: AssignmentSource,
    pub sync_status: AssignmentSyncStatus,
}

impl Assignment {
    pub fn validate(&self) -> Result<(), PeriodError> {
        self.period.validate()
    }
}

/// Formats a date as zero-padded `YYYY-MM-DD`.
pub fn format_iso_day(day: NaiveDate) -> String {
    day.format(ISO_DAY_FORMAT).to_string()
}

/// Parses the `YYYY-MM-DD` prefix of a date or timestamp string.
pub fn parse_iso_day(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(normalize_iso_day(value), ISO_DAY_FORMAT).ok()
}

/// Strips a time component (`2026-01-26T08:00:00Z` -> `2026-01-26`).
fn normalize_iso_day(value: &str) -> &str {
    let trimmed = value.trim();
    match trimmed.get(..ISO_DAY_LEN) {
        Some(prefix) if trimmed.len() > ISO_DAY_LEN => {
            let separator = trimmed.as_bytes()[ISO_DAY_LEN];
            if separator == b'T' || separator == b' ' {
                prefix
            } else {
                trimmed
            }
        }
        _ => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_iso_day, AssignmentPeriod, AssignmentSource, PeriodError};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn covers_is_inclusive_on_both_ends() {
        let period = AssignmentPeriod::new("2026-01-26", "2026-01-28");
        assert!(!period.covers(date(2026, 1, 25)));
        assert!(period.covers(date(2026, 1, 26)));
        assert!(period.covers(date(2026, 1, 27)));
        assert!(period.covers(date(2026, 1, 28)));
        assert!(!period.covers(date(2026, 1, 29)));
    }

    #[test]
    fn single_day_period_covers_exactly_that_day() {
        let period = AssignmentPeriod::single_day(date(2026, 2, 3));
        assert_eq!(period, AssignmentPeriod::new("2026-02-03", "2026-02-03"));
        assert!(period.validate().is_ok());
        assert!(period.covers(date(2026, 2, 3)));
        assert!(!period.covers(date(2026, 2, 2)));
        assert!(!period.covers(date(2026, 2, 4)));
    }

    #[test]
    fn covers_ignores_time_component_of_bounds() {
        let period = AssignmentPeriod::new("2026-01-26T08:00:00Z", "2026-01-26T17:00:00Z");
        assert!(period.covers(date(2026, 1, 26)));
        assert!(period.covers_iso_day("2026-01-26T23:59:59.000Z"));
    }

    #[test]
    fn validate_rejects_reversed_and_malformed_periods() {
        let reversed = AssignmentPeriod::new("2026-01-28", "2026-01-26");
        assert!(matches!(
            reversed.validate(),
            Err(PeriodError::Reversed { .. })
        ));

        let malformed = AssignmentPeriod::new("26.01.2026", "2026-01-26");
        assert_eq!(
            malformed.validate(),
            Err(PeriodError::InvalidDate {
                field: "startDate",
                value: "26.01.2026".to_string(),
            })
        );

        assert!(AssignmentPeriod::new("2026-01-26", "2026-01-26")
            .validate()
            .is_ok());
    }

    #[test]
    fn parse_iso_day_handles_timestamps() {
        assert_eq!(
            parse_iso_day("2025-12-29T00:00:00.000Z"),
            Some(date(2025, 12, 29))
        );
        assert_eq!(parse_iso_day("not a date"), None);
    }

    #[test]
    fn source_parse_is_exact() {
        assert_eq!(AssignmentSource::parse("ical"), Some(AssignmentSource::Ical));
        assert_eq!(AssignmentSource::parse("app"), None);
        assert_eq!(AssignmentSource::parse("Manual"), None);
    }
}
