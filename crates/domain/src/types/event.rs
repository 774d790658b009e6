//! Class events handed to the calendar publisher.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use serde::Serialize;

use crate::constants::CLASS_DURATION_MINUTES;
use crate::errors::{ClassCalError, Result};

/// Local wall-clock time tagged with the zone it belongs to.
///
/// Wire form: `{ "dateTime": "2024-06-24T09:00:00", "timeZone": "Asia/Kolkata" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTime {
    date_time: NaiveDateTime,
    time_zone: Tz,
}

impl EventTime {
    pub fn new(date_time: NaiveDateTime, time_zone: Tz) -> Self {
        Self { date_time, time_zone }
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Resolve to an absolute instant in the attached zone.
    ///
    /// Ambiguous local times (DST fall-back) resolve to the earliest instant.
    ///
    /// # Errors
    /// Returns `ClassCalError::Config` when the local time does not exist in
    /// the zone (DST spring-forward gap).
    pub fn to_zoned(&self) -> Result<DateTime<Tz>> {
        self.time_zone.from_local_datetime(&self.date_time).earliest().ok_or_else(|| {
            ClassCalError::Config(format!(
                "{} does not exist in time zone {}",
                self.date_time, self.time_zone
            ))
        })
    }
}

/// One class meeting: a subject label at a concrete start time.
///
/// Immutable after construction; `end` is always `start` plus the fixed class
/// duration and `summary` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassEvent {
    summary: String,
    start: EventTime,
    end: EventTime,
}

impl ClassEvent {
    /// Fixed length of every class.
    pub fn duration() -> Duration {
        Duration::minutes(CLASS_DURATION_MINUTES)
    }

    /// Build an event from a raw label and the slot's date and time.
    ///
    /// The label is trimmed of surrounding whitespace.
    ///
    /// # Errors
    /// Returns `ClassCalError::InvalidInput` if the trimmed label is empty.
    pub fn new(label: &str, date: NaiveDate, time: NaiveTime, time_zone: Tz) -> Result<Self> {
        let summary = label.trim();
        if summary.is_empty() {
            return Err(ClassCalError::InvalidInput("class summary is empty".into()));
        }

        let start = date.and_time(time);
        let end = start.checked_add_signed(Self::duration()).ok_or_else(|| {
            ClassCalError::InvalidInput(format!("class starting at {start} ends out of range"))
        })?;

        Ok(Self {
            summary: summary.to_string(),
            start: EventTime::new(start, time_zone),
            end: EventTime::new(end, time_zone),
        })
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn start(&self) -> &EventTime {
        &self.start
    }

    pub fn end(&self) -> &EventTime {
        &self.end
    }
}
