//! Token extraction inside a day segment
//!
//! Time slots and subject labels are found by two independent lexical passes
//! and related only by position. [`extract_entries`] is the single-pass
//! alternative that reads each slot together with the label following it.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `hh:mm am` / `hh:mm pm`, lowercase meridiem.
    static ref TIME_SLOT: Regex = Regex::new(r"[0-9]{2}:[0-9]{2}[ \t]*(?:am|pm)")
        .expect("TIME_SLOT should compile - this is a bug");

    /// A line starting with an uppercase letter or digit, up to the line break.
    static ref LABEL_LINE: Regex = Regex::new(r"(?m)^[ \t]*([A-Z0-9][^\n]*)")
        .expect("LABEL_LINE should compile - this is a bug");
}

/// One time slot read together with its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassEntry<'a> {
    pub time: &'a str,
    /// `None` when no label line follows the slot before the next slot.
    pub label: Option<&'a str>,
}

/// Every time-slot marker in `segment`, left to right.
pub fn extract_time_slots(segment: &str) -> Vec<&str> {
    TIME_SLOT.find_iter(segment).map(|m| m.as_str()).collect()
}

/// Every subject-label line in `segment`, in order of appearance.
///
/// Time-slot markers count as line breaks here, so `09:00 am MATH101` on one
/// line yields the label `MATH101` rather than the whole line. Labels are
/// returned untrimmed at the end; trailing whitespace and `\r` are kept.
pub fn extract_subject_labels(segment: &str) -> Vec<&str> {
    between_time_slots(segment).flat_map(label_lines).collect()
}

/// Each time slot paired with the first label line that follows it.
///
/// The label must appear before the next time slot; text ahead of the first
/// slot is ignored.
pub fn extract_entries(segment: &str) -> Vec<ClassEntry<'_>> {
    let slots: Vec<_> = TIME_SLOT.find_iter(segment).collect();

    slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let region_end = slots.get(i + 1).map_or(segment.len(), |next| next.start());
            let region = &segment[slot.end()..region_end];
            ClassEntry { time: slot.as_str(), label: label_lines(region).next() }
        })
        .collect()
}

/// The pieces of `segment` left after cutting out every time-slot marker.
fn between_time_slots(segment: &str) -> impl Iterator<Item = &str> {
    let mut cursor = 0;
    let mut pieces = Vec::new();
    for slot in TIME_SLOT.find_iter(segment) {
        pieces.push(&segment[cursor..slot.start()]);
        cursor = slot.end();
    }
    pieces.push(&segment[cursor..]);
    pieces.into_iter()
}

fn label_lines(piece: &str) -> impl Iterator<Item = &str> {
    LABEL_LINE.captures_iter(piece).filter_map(|caps| caps.get(1)).map(|m| m.as_str())
}
