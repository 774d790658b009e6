//! Domain types and models

pub mod anchors;
pub mod diagnostic;
pub mod event;
pub mod weekday;

pub use anchors::WeekdayAnchors;
pub use diagnostic::{Diagnostic, DiagnosticKind, TimetableParse};
pub use event::{ClassEvent, EventTime};
pub use weekday::Weekday;
