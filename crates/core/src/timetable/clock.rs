//! 12-hour clock parsing for time-slot strings

use chrono::NaiveTime;
use classcal_domain::{ClassCalError, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref CLOCK: Regex = Regex::new(r"^([0-9]{2}):([0-9]{2})[ \t]*(am|pm)$")
        .expect("CLOCK should compile - this is a bug");
}

/// Parse `hh:mm am|pm` into a time of day.
///
/// Hours run 01–12; `12:xx am` is just after midnight and `12:xx pm` just
/// after noon.
///
/// # Errors
/// Returns `ClassCalError::TimeParse` if the string does not have that shape
/// or names an impossible hour or minute.
pub fn parse_clock_time(raw: &str) -> Result<NaiveTime> {
    let trimmed = raw.trim();
    let caps = CLOCK.captures(trimmed).ok_or_else(|| {
        ClassCalError::TimeParse(format!("{trimmed:?} does not match hh:mm am|pm"))
    })?;

    let hour: u32 = caps[1]
        .parse()
        .map_err(|e| ClassCalError::TimeParse(format!("invalid hour in {trimmed:?}: {e}")))?;
    let minute: u32 = caps[2]
        .parse()
        .map_err(|e| ClassCalError::TimeParse(format!("invalid minute in {trimmed:?}: {e}")))?;

    if !(1..=12).contains(&hour) {
        return Err(ClassCalError::TimeParse(format!(
            "hour {hour} in {trimmed:?} is outside 01-12"
        )));
    }

    let hour24 = match (&caps[3], hour) {
        ("am", 12) => 0,
        ("am", h) => h,
        ("pm", 12) => 12,
        (_, h) => h + 12,
    };

    NaiveTime::from_hms_opt(hour24, minute, 0).ok_or_else(|| {
        ClassCalError::TimeParse(format!("minute {minute} in {trimmed:?} is outside 00-59"))
    })
}
