//! Structured parse diagnostics returned alongside events.

use std::fmt;

use serde::Serialize;

use super::event::ClassEvent;
use super::weekday::Weekday;

/// A recoverable problem found while parsing one day segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Weekday whose segment produced the problem.
    pub day: Weekday,
    /// 0-based index of the day segment in source order.
    pub segment: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

/// What went wrong, with the raw evidence that was extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Time-slot and subject-label counts differ; the whole day was dropped.
    AlignmentMismatch { time_slots: Vec<String>, subject_labels: Vec<String> },
    /// One slot's time could not be parsed; only that subject was dropped.
    TimeParse { raw_time: String, subject: String, reason: String },
    /// A label trimmed down to nothing.
    EmptySummary { raw_label: String },
    /// No anchor date for this weekday; the day was dropped.
    MissingAnchor,
    /// Any other per-subject construction failure.
    Construction { subject: String, reason: String },
}

impl Diagnostic {
    pub fn new(day: Weekday, segment: usize, kind: DiagnosticKind) -> Self {
        Self { day, segment, kind }
    }

    /// Stable machine-readable code for the diagnostic kind.
    pub fn code(&self) -> &'static str {
        match self.kind {
            DiagnosticKind::AlignmentMismatch { .. } => "alignment_mismatch",
            DiagnosticKind::TimeParse { .. } => "time_parse",
            DiagnosticKind::EmptySummary { .. } => "empty_summary",
            DiagnosticKind::MissingAnchor => "missing_anchor",
            DiagnosticKind::Construction { .. } => "construction",
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (segment {}): ", self.day, self.segment)?;
        match &self.kind {
            DiagnosticKind::AlignmentMismatch { time_slots, subject_labels } => write!(
                f,
                "mismatch in times and subjects: {} times {:?}, {} subjects {:?}",
                time_slots.len(),
                time_slots,
                subject_labels.len(),
                subject_labels
            ),
            DiagnosticKind::TimeParse { raw_time, subject, reason } => {
                write!(f, "cannot parse time {raw_time:?} for {subject:?}: {reason}")
            }
            DiagnosticKind::EmptySummary { raw_label } => {
                write!(f, "subject label {raw_label:?} is empty after trimming")
            }
            DiagnosticKind::MissingAnchor => f.write_str("no anchor date configured"),
            DiagnosticKind::Construction { subject, reason } => {
                write!(f, "error processing subject {subject:?}: {reason}")
            }
        }
    }
}

/// Output of one parse run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimetableParse {
    /// Events in day-segment order, then time-slot order.
    pub events: Vec<ClassEvent>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TimetableParse {
    /// True when no diagnostics were recorded.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_serializes_with_kind_tag_and_evidence() {
        let diagnostic = Diagnostic::new(
            Weekday::Tuesday,
            1,
            DiagnosticKind::AlignmentMismatch {
                time_slots: vec!["09:00 am".into(), "10:00 am".into()],
                subject_labels: vec!["CHEM101".into()],
            },
        );

        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "day": "TUESDAY",
                "segment": 1,
                "kind": "alignment_mismatch",
                "time_slots": ["09:00 am", "10:00 am"],
                "subject_labels": ["CHEM101"],
            })
        );
        assert_eq!(diagnostic.code(), "alignment_mismatch");
    }

    #[test]
    fn display_names_the_day() {
        let diagnostic = Diagnostic::new(Weekday::Friday, 4, DiagnosticKind::MissingAnchor);
        assert_eq!(diagnostic.to_string(), "FRIDAY (segment 4): no anchor date configured");
    }
}
