//! Weekday → calendar date mapping for one instance of the timetable.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::weekday::Weekday;
use crate::errors::{ClassCalError, Result};

/// Concrete dates assigned to each weekday for one parse run.
///
/// Supplied by the caller, never derived from timetable text. Serialises as a
/// map keyed by weekday identifier, e.g. `{ "MONDAY": "2024-06-24" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekdayAnchors {
    dates: BTreeMap<Weekday, NaiveDate>,
}

impl WeekdayAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor all five weekdays to consecutive dates starting at `monday`.
    ///
    /// # Errors
    /// Returns `ClassCalError::Config` if `monday` is not a Monday.
    pub fn from_week_start(monday: NaiveDate) -> Result<Self> {
        if monday.weekday() != chrono::Weekday::Mon {
            return Err(ClassCalError::Config(format!(
                "week start {monday} is a {}, expected a Monday",
                monday.weekday()
            )));
        }

        let mut anchors = Self::new();
        for day in Weekday::ALL {
            let date = monday
                .checked_add_days(Days::new(day.offset_from_monday()))
                .ok_or_else(|| {
                    ClassCalError::Config(format!("week starting {monday} is out of range"))
                })?;
            anchors.insert(day, date);
        }
        Ok(anchors)
    }

    /// Builder-style insert.
    pub fn with(mut self, day: Weekday, date: NaiveDate) -> Self {
        self.insert(day, date);
        self
    }

    pub fn insert(&mut self, day: Weekday, date: NaiveDate) -> Option<NaiveDate> {
        self.dates.insert(day, date)
    }

    pub fn get(&self, day: Weekday) -> Option<NaiveDate> {
        self.dates.get(&day).copied()
    }

    /// Days from `days` that have no anchor, deduplicated and in week order.
    pub fn missing<I>(&self, days: I) -> Vec<Weekday>
    where
        I: IntoIterator<Item = Weekday>,
    {
        let mut missing: Vec<Weekday> =
            days.into_iter().filter(|day| !self.dates.contains_key(day)).collect();
        missing.sort();
        missing.dedup();
        missing
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, NaiveDate)> + '_ {
        self.dates.iter().map(|(day, date)| (*day, *date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn week_start_anchors_consecutive_days() {
        let anchors = WeekdayAnchors::from_week_start(date(2024, 6, 24)).unwrap();

        assert_eq!(anchors.len(), 5);
        assert_eq!(anchors.get(Weekday::Monday), Some(date(2024, 6, 24)));
        assert_eq!(anchors.get(Weekday::Wednesday), Some(date(2024, 6, 26)));
        assert_eq!(anchors.get(Weekday::Friday), Some(date(2024, 6, 28)));
    }

    #[test]
    fn week_start_must_be_monday() {
        let err = WeekdayAnchors::from_week_start(date(2024, 6, 25)).unwrap_err();
        assert!(matches!(err, ClassCalError::Config(_)));
    }

    #[test]
    fn missing_reports_each_day_once_in_week_order() {
        let anchors = WeekdayAnchors::new().with(Weekday::Tuesday, date(2024, 6, 25));

        let missing = anchors.missing([
            Weekday::Friday,
            Weekday::Tuesday,
            Weekday::Monday,
            Weekday::Friday,
        ]);

        assert_eq!(missing, vec![Weekday::Monday, Weekday::Friday]);
    }

    #[test]
    fn serializes_as_identifier_map() {
        let anchors = WeekdayAnchors::new()
            .with(Weekday::Monday, date(2024, 6, 24))
            .with(Weekday::Friday, date(2024, 6, 28));

        let json = serde_json::to_value(&anchors).unwrap();
        assert_eq!(json, serde_json::json!({ "MONDAY": "2024-06-24", "FRIDAY": "2024-06-28" }));

        let back: WeekdayAnchors = serde_json::from_value(json).unwrap();
        assert_eq!(back, anchors);
    }
}
