//! Day segmentation

use classcal_domain::Weekday;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Whole-word, case-sensitive weekday identifier.
    static ref DAY_MARKER: Regex = Regex::new(r"\b(?:MONDAY|TUESDAY|WEDNESDAY|THURSDAY|FRIDAY)\b")
        .expect("DAY_MARKER should compile - this is a bug");
}

/// Text belonging to one occurrence of a weekday identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySegment<'a> {
    pub day: Weekday,
    /// Position of this segment among all segments of the text.
    pub index: usize,
    /// Everything after the identifier up to the next identifier or the end.
    pub text: &'a str,
}

/// Split `text` into one segment per weekday identifier, in source order.
///
/// Text before the first identifier belongs to no segment. Repeated
/// identifiers (a day header repeated on every page) each start their own
/// segment.
pub fn segment_by_day(text: &str) -> Vec<DaySegment<'_>> {
    let markers: Vec<_> = DAY_MARKER
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<Weekday>().ok().map(|day| (day, m.start(), m.end())))
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(index, &(day, _, body_start))| {
            let body_end = markers.get(index + 1).map_or(text.len(), |&(_, next, _)| next);
            DaySegment { day, index, text: &text[body_start..body_end] }
        })
        .collect()
}
