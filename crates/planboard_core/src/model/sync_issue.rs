//! Sync issue records reported by import/sync adapters.

use serde::{Deserialize, Serialize};

/// System that reported a sync issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncSource {
    Daylite,
    Planradar,
    Ical,
    Manual,
}

impl SyncSource {
    pub const ALL: [SyncSource; 4] = [
        SyncSource::Daylite,
        SyncSource::Planradar,
        SyncSource::Ical,
        SyncSource::Manual,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daylite => "daylite",
            Self::Planradar => "planradar",
            Self::Ical => "ical",
            Self::Manual => "manual",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source| source.as_str() == value)
    }
}

/// One problem surfaced while loading external data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncIssue {
    pub source: SyncSource,
    /// Stable machine-readable code, e.g. `invalid_contact_record`.
    pub code: String,
    pub message: String,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

impl SyncIssue {
    pub fn new(
        source: SyncSource,
        code: impl Into<String>,
        message: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            source,
            code: code.into(),
            message: message.into(),
            timestamp: timestamp.into(),
        }
    }
}
