//! Timetable parsing
//!
//! Turns raw timetable text into class events in three passes:
//!
//! 1. [`segment_by_day`] splits the text at every weekday identifier.
//! 2. [`extract_time_slots`] and [`extract_subject_labels`] pull the two token
//!    streams out of each day segment.
//! 3. [`TimetableParser`] pairs them, anchors each pair to a date, and records
//!    a [`Diagnostic`](classcal_domain::Diagnostic) for anything it has to
//!    drop.
//!
//! Parsing is pure: no I/O, no state between calls.

pub mod clock;
pub mod extract;
pub mod parser;
pub mod segment;

pub use clock::parse_clock_time;
pub use extract::{extract_entries, extract_subject_labels, extract_time_slots, ClassEntry};
pub use parser::{ParserSettings, TimetableParser};
pub use segment::{segment_by_day, DaySegment};
