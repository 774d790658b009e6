//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

use chrono_tz::Tz;

/// Length of every class, start to end.
pub const CLASS_DURATION_MINUTES: i64 = 50;

/// Time zone attached to events when the configuration does not name one.
pub const DEFAULT_TIME_ZONE: Tz = Tz::Asia__Kolkata;

// Calendar publishing defaults
pub const DEFAULT_CALENDAR_ID: &str = "primary";
pub const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_PUBLISH_CONCURRENCY: usize = 4;

// Logging defaults
pub const DEFAULT_LOG_FILTER: &str = "info";
