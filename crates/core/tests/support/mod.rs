//! Shared test doubles for core integration tests.

#![allow(dead_code)]

pub mod fakes;

use chrono::NaiveDate;
use classcal_domain::WeekdayAnchors;

/// Anchors for the week of 2024-06-24 (Monday) .. 2024-06-28 (Friday).
pub fn june_week() -> WeekdayAnchors {
    WeekdayAnchors::from_week_start(NaiveDate::from_ymd_opt(2024, 6, 24).unwrap()).unwrap()
}
