//! Timetable parser: day segments → class events

use chrono::NaiveDate;
use chrono_tz::Tz;
use classcal_domain::constants::DEFAULT_TIME_ZONE;
use classcal_domain::{
    AnchorPolicy, ClassCalError, ClassEvent, Diagnostic, DiagnosticKind, PairingStrategy, Result,
    TimetableConfig, TimetableParse, WeekdayAnchors,
};
use tracing::{debug, info, warn};

use super::clock::parse_clock_time;
use super::extract::{extract_entries, extract_subject_labels, extract_time_slots};
use super::segment::{segment_by_day, DaySegment};

/// Settings fixed for the lifetime of a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserSettings {
    pub time_zone: Tz,
    pub anchor_policy: AnchorPolicy,
    pub pairing: PairingStrategy,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE,
            anchor_policy: AnchorPolicy::default(),
            pairing: PairingStrategy::default(),
        }
    }
}

impl From<&TimetableConfig> for ParserSettings {
    fn from(config: &TimetableConfig) -> Self {
        Self {
            time_zone: config.time_zone,
            anchor_policy: config.anchor_policy,
            pairing: config.pairing,
        }
    }
}

/// Converts timetable text into class events.
///
/// Problems local to one day or one subject become diagnostics; only a
/// missing anchor under [`AnchorPolicy::Strict`] fails the whole run.
#[derive(Debug, Clone, Default)]
pub struct TimetableParser {
    settings: ParserSettings,
}

/// A raw (time, label) pair awaiting conversion.
type RawPair<'a> = (&'a str, &'a str);

impl TimetableParser {
    pub fn new(settings: ParserSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Parse `text` using `anchors` to date each weekday.
    ///
    /// Events come out in day-segment order, then slot order within a day.
    ///
    /// # Errors
    /// Returns `ClassCalError::Config` under the strict anchor policy when a
    /// weekday present in the text has no anchor date.
    pub fn parse(&self, text: &str, anchors: &WeekdayAnchors) -> Result<TimetableParse> {
        let segments = segment_by_day(text);

        if self.settings.anchor_policy == AnchorPolicy::Strict {
            let missing = anchors.missing(segments.iter().map(|segment| segment.day));
            if !missing.is_empty() {
                let days: Vec<String> = missing.iter().map(ToString::to_string).collect();
                return Err(ClassCalError::Config(format!(
                    "no anchor date for {}",
                    days.join(", ")
                )));
            }
        }

        let mut output = TimetableParse::default();
        for segment in &segments {
            self.parse_segment(segment, anchors, &mut output);
        }

        info!(
            segments = segments.len(),
            events = output.events.len(),
            diagnostics = output.diagnostics.len(),
            "parsed timetable"
        );

        Ok(output)
    }

    fn parse_segment(
        &self,
        segment: &DaySegment<'_>,
        anchors: &WeekdayAnchors,
        output: &mut TimetableParse,
    ) {
        let Some(date) = anchors.get(segment.day) else {
            report(output, segment, DiagnosticKind::MissingAnchor);
            return;
        };

        let pairs = match self.settings.pairing {
            PairingStrategy::Positional => pair_positionally(segment.text),
            PairingStrategy::Combined => pair_entries(segment.text),
        };

        let pairs = match pairs {
            Ok(pairs) => pairs,
            Err(kind) => {
                report(output, segment, kind);
                return;
            }
        };

        debug!(day = %segment.day, segment = segment.index, pairs = pairs.len(), "aligned day");

        for (raw_time, raw_label) in pairs {
            match self.build_event(date, raw_time, raw_label) {
                Ok(event) => output.events.push(event),
                Err(kind) => report(output, segment, kind),
            }
        }
    }

    fn build_event(
        &self,
        date: NaiveDate,
        raw_time: &str,
        raw_label: &str,
    ) -> std::result::Result<ClassEvent, DiagnosticKind> {
        let subject = raw_label.trim();

        let time = parse_clock_time(raw_time).map_err(|err| DiagnosticKind::TimeParse {
            raw_time: raw_time.to_string(),
            subject: subject.to_string(),
            reason: err.to_string(),
        })?;

        if subject.is_empty() {
            return Err(DiagnosticKind::EmptySummary { raw_label: raw_label.to_string() });
        }

        ClassEvent::new(subject, date, time, self.settings.time_zone).map_err(|err| {
            DiagnosticKind::Construction { subject: subject.to_string(), reason: err.to_string() }
        })
    }
}

/// Pair the i-th time slot with the i-th label; unequal counts drop the day.
fn pair_positionally(segment: &str) -> std::result::Result<Vec<RawPair<'_>>, DiagnosticKind> {
    let times = extract_time_slots(segment);
    let labels = extract_subject_labels(segment);

    if times.len() != labels.len() {
        return Err(DiagnosticKind::AlignmentMismatch {
            time_slots: times.iter().map(ToString::to_string).collect(),
            subject_labels: labels.iter().map(ToString::to_string).collect(),
        });
    }

    Ok(times.into_iter().zip(labels).collect())
}

/// Read each slot with its own label; any slot without one drops the day.
fn pair_entries(segment: &str) -> std::result::Result<Vec<RawPair<'_>>, DiagnosticKind> {
    let entries = extract_entries(segment);

    if entries.iter().any(|entry| entry.label.is_none()) {
        return Err(DiagnosticKind::AlignmentMismatch {
            time_slots: entries.iter().map(|entry| entry.time.to_string()).collect(),
            subject_labels: entries
                .iter()
                .filter_map(|entry| entry.label.map(ToString::to_string))
                .collect(),
        });
    }

    Ok(entries.into_iter().filter_map(|entry| entry.label.map(|label| (entry.time, label))).collect())
}

fn report(output: &mut TimetableParse, segment: &DaySegment<'_>, kind: DiagnosticKind) {
    let diagnostic = Diagnostic::new(segment.day, segment.index, kind);
    warn!(
        day = %diagnostic.day,
        segment = diagnostic.segment,
        code = diagnostic.code(),
        "{diagnostic}"
    );
    output.diagnostics.push(diagnostic);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use classcal_domain::Weekday;

    use super::*;

    fn anchors() -> WeekdayAnchors {
        WeekdayAnchors::from_week_start(NaiveDate::from_ymd_opt(2024, 6, 24).unwrap()).unwrap()
    }

    #[test]
    fn invalid_hour_drops_only_that_subject() {
        let text = "MONDAY\n13:00 pm BAD101\n10:00 am GOOD101\n";

        let parsed = TimetableParser::default().parse(text, &anchors()).unwrap();

        assert_eq!(parsed.events.len(), 1);
        assert_eq!(parsed.events[0].summary(), "GOOD101");
        assert_eq!(parsed.diagnostics.len(), 1);
        assert_eq!(parsed.diagnostics[0].code(), "time_parse");
        match &parsed.diagnostics[0].kind {
            DiagnosticKind::TimeParse { raw_time, subject, .. } => {
                assert_eq!(raw_time, "13:00 pm");
                assert_eq!(subject, "BAD101");
            }
            other => panic!("unexpected diagnostic {other:?}"),
        }
    }

    #[test]
    fn strict_policy_fails_on_unanchored_day() {
        let partial = WeekdayAnchors::new()
            .with(Weekday::Monday, NaiveDate::from_ymd_opt(2024, 6, 24).unwrap());

        let err = TimetableParser::default()
            .parse("MONDAY\n09:00 am A\nFRIDAY\n09:00 am B\n", &partial)
            .unwrap_err();

        assert_eq!(err, ClassCalError::Config("no anchor date for FRIDAY".into()));
    }

    #[test]
    fn partial_policy_skips_unanchored_day() {
        let partial = WeekdayAnchors::new()
            .with(Weekday::Monday, NaiveDate::from_ymd_opt(2024, 6, 24).unwrap());
        let parser = TimetableParser::new(ParserSettings {
            anchor_policy: AnchorPolicy::Partial,
            ..ParserSettings::default()
        });

        let parsed = parser.parse("MONDAY\n09:00 am A\nFRIDAY\n09:00 am B\n", &partial).unwrap();

        assert_eq!(parsed.events.len(), 1);
        assert_eq!(parsed.events[0].summary(), "A");
        assert_eq!(parsed.diagnostics, vec![Diagnostic::new(
            Weekday::Friday,
            1,
            DiagnosticKind::MissingAnchor
        )]);
    }

    #[test]
    fn combined_pairing_ignores_stray_label_lines() {
        let text = "TUESDAY\nNOTICE Lab closed\n09:00 am CHEM101\nRoom 12\n10:00 am BIO101\n";
        let parser = TimetableParser::new(ParserSettings {
            pairing: PairingStrategy::Combined,
            ..ParserSettings::default()
        });

        let parsed = parser.parse(text, &anchors()).unwrap();

        let summaries: Vec<_> = parsed.events.iter().map(ClassEvent::summary).collect();
        assert_eq!(summaries, vec!["CHEM101", "BIO101"]);
        assert!(parsed.is_clean());
    }

    #[test]
    fn combined_pairing_drops_day_with_unlabelled_slot() {
        let text = "WEDNESDAY\n09:00 am CHEM101\n10:00 am\n";
        let parser = TimetableParser::new(ParserSettings {
            pairing: PairingStrategy::Combined,
            ..ParserSettings::default()
        });

        let parsed = parser.parse(text, &anchors()).unwrap();

        assert!(parsed.events.is_empty());
        assert_eq!(parsed.diagnostics[0].code(), "alignment_mismatch");
    }

    #[test]
    fn events_use_configured_time_zone() {
        let parser = TimetableParser::new(ParserSettings {
            time_zone: Tz::Europe__London,
            ..ParserSettings::default()
        });

        let parsed = parser.parse("THURSDAY 02:00 pm ART100\n", &anchors()).unwrap();

        assert_eq!(parsed.events[0].start().time_zone(), Tz::Europe__London);
        assert_eq!(
            parsed.events[0].start().date_time(),
            NaiveDate::from_ymd_opt(2024, 6, 27).unwrap().and_hms_opt(14, 0, 0).unwrap()
        );
    }
}
