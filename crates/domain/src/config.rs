//! Configuration structures
//!
//! Plain serde types; loading from files and the environment lives in the
//! infrastructure crate.

use std::path::PathBuf;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_ID, DEFAULT_HTTP_MAX_ATTEMPTS, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOG_FILTER,
    DEFAULT_PUBLISH_CONCURRENCY, DEFAULT_TIME_ZONE, GOOGLE_CALENDAR_API_BASE,
};
use crate::errors::{ClassCalError, Result};
use crate::impl_identifier_conversions;
use crate::types::WeekdayAnchors;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub timetable: TimetableConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What to do when the text references a weekday with no anchor date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorPolicy {
    /// Fail the whole run.
    #[default]
    Strict,
    /// Drop only the unanchored day segments and report them.
    Partial,
}

impl_identifier_conversions!(AnchorPolicy {
    Strict => "strict",
    Partial => "partial",
});

/// How time slots are associated with subject labels inside a day segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingStrategy {
    /// Extract times and labels independently and pair them by position.
    #[default]
    Positional,
    /// Match each `time label` entry as a single token.
    Combined,
}

impl_identifier_conversions!(PairingStrategy {
    Positional => "positional",
    Combined => "combined",
});

/// Timetable source and parse settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableConfig {
    /// File the timetable text is extracted from.
    pub source_path: PathBuf,
    #[serde(default = "default_time_zone")]
    pub time_zone: Tz,
    /// Monday of the week the timetable is instantiated for.
    #[serde(default)]
    pub week_start: Option<NaiveDate>,
    /// Explicit per-day dates; takes precedence over `week_start`.
    #[serde(default)]
    pub anchors: Option<WeekdayAnchors>,
    #[serde(default)]
    pub anchor_policy: AnchorPolicy,
    #[serde(default)]
    pub pairing: PairingStrategy,
}

impl TimetableConfig {
    /// Resolve the weekday anchors for this run.
    ///
    /// # Errors
    /// Returns `ClassCalError::Config` when neither `anchors` nor
    /// `week_start` is set, or `week_start` is not a Monday.
    pub fn resolve_anchors(&self) -> Result<WeekdayAnchors> {
        match (&self.anchors, self.week_start) {
            (Some(anchors), _) => Ok(anchors.clone()),
            (None, Some(monday)) => WeekdayAnchors::from_week_start(monday),
            (None, None) => Err(ClassCalError::Config(
                "timetable needs either `anchors` or `week_start`".into(),
            )),
        }
    }
}

/// Remote calendar settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub calendar_id: String,
    pub api_base_url: String,
    /// Already-issued OAuth access token. Never serialised back out.
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    pub timeout_secs: u64,
    pub max_attempts: usize,
    /// Maximum number of events published at once.
    pub concurrency: usize,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            calendar_id: DEFAULT_CALENDAR_ID.to_string(),
            api_base_url: GOOGLE_CALENDAR_API_BASE.to_string(),
            access_token: None,
            timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            max_attempts: DEFAULT_HTTP_MAX_ATTEMPTS,
            concurrency: DEFAULT_PUBLISH_CONCURRENCY,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` env-filter directive, e.g. `info,classcal_core=debug`.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: DEFAULT_LOG_FILTER.to_string(), json: false }
    }
}

fn default_time_zone() -> Tz {
    DEFAULT_TIME_ZONE
}
