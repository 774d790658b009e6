//! Integration tests for configuration loader
//!
//! Tests the end-to-end behavior of loading configuration from files.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use chrono_tz::Tz;
use classcal_domain::{AnchorPolicy, ClassCalError, PairingStrategy, Weekday};
use classcal_infra::config;
use tempfile::NamedTempFile;

fn write_config(contents: &str, extension: &str) -> PathBuf {
    let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
    temp_file.write_all(contents.as_bytes()).expect("Failed to write to temp file");

    let path = temp_file.path().with_extension(extension);
    std::fs::copy(temp_file.path(), &path).expect("Failed to copy file");
    path
}

#[test]
fn test_load_config_from_json_file() {
    let path = write_config(
        r#"{
            "timetable": {
                "source_path": "pdfs/class timetable.pdf",
                "time_zone": "Asia/Kolkata",
                "week_start": "2024-06-24",
                "anchor_policy": "partial",
                "pairing": "combined"
            },
            "calendar": {
                "calendar_id": "primary",
                "timeout_secs": 10,
                "max_attempts": 5
            },
            "logging": {
                "filter": "debug",
                "json": true
            }
        }"#,
        "json",
    );

    let config = config::load_from_file(Some(path.clone())).expect("json config");

    assert_eq!(config.timetable.source_path, PathBuf::from("pdfs/class timetable.pdf"));
    assert_eq!(config.timetable.time_zone, Tz::Asia__Kolkata);
    assert_eq!(config.timetable.anchor_policy, AnchorPolicy::Partial);
    assert_eq!(config.timetable.pairing, PairingStrategy::Combined);
    assert_eq!(config.calendar.timeout_secs, 10);
    assert_eq!(config.calendar.max_attempts, 5);
    assert_eq!(config.logging.filter, "debug");
    assert!(config.logging.json);

    let anchors = config.timetable.resolve_anchors().expect("anchors from week start");
    assert_eq!(anchors.get(Weekday::Friday), NaiveDate::from_ymd_opt(2024, 6, 28));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_with_explicit_anchors() {
    let path = write_config(
        r#"
        [timetable]
        source_path = "timetable.pdf"

        [timetable.anchors]
        MONDAY = "2024-06-24"
        WEDNESDAY = "2024-06-26"
        "#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("toml config");
    let anchors = config.timetable.resolve_anchors().expect("explicit anchors");

    assert_eq!(anchors.len(), 2);
    assert_eq!(anchors.get(Weekday::Wednesday), NaiveDate::from_ymd_opt(2024, 6, 26));
    assert_eq!(anchors.get(Weekday::Tuesday), None);

    std::fs::remove_file(path).ok();
}

#[test]
fn test_calendar_defaults_when_section_missing() {
    let path = write_config(
        r#"
        [timetable]
        source_path = "timetable.pdf"
        week_start = "2024-06-24"
        "#,
        "toml",
    );

    let config = config::load_from_file(Some(path.clone())).expect("toml config");

    assert_eq!(config.calendar.calendar_id, "primary");
    assert_eq!(config.calendar.api_base_url, "https://www.googleapis.com/calendar/v3");
    assert_eq!(config.calendar.access_token, None);
    assert_eq!(config.logging.filter, "info");

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_invalid_format() {
    let path = write_config("{ this is not valid json }", "json");

    let result = config::load_from_file(Some(path.clone()));
    assert!(matches!(result, Err(ClassCalError::Config(msg)) if msg.contains("Invalid JSON")));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_rejects_unknown_time_zone() {
    let path = write_config(
        r#"
        [timetable]
        source_path = "timetable.pdf"
        time_zone = "Atlantis/Capital"
        "#,
        "toml",
    );

    let result = config::load_from_file(Some(path.clone()));
    assert!(matches!(result, Err(ClassCalError::Config(_))));

    std::fs::remove_file(path).ok();
}

#[test]
fn test_load_config_rejects_bad_api_url() {
    let path = write_config(
        r#"
        [timetable]
        source_path = "timetable.pdf"
        week_start = "2024-06-24"

        [calendar]
        api_base_url = "not a url"
        "#,
        "toml",
    );

    let result = config::load_from_file(Some(path.clone()));
    assert!(matches!(result, Err(ClassCalError::Config(msg)) if msg.contains("calendar API URL")));

    std::fs::remove_file(path).ok();
}
