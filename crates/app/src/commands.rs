use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use classcal_core::{ImportService, ParserSettings, PublishReport, TextSource, TimetableParser};
use classcal_domain::constants::DEFAULT_TIME_ZONE;
use classcal_domain::{AppConfig, CalendarConfig, LoggingConfig, TimetableConfig, TimetableParse};
use classcal_infra::{config, FileTextSource, GoogleCalendarPublisher, StaticTokenSession};
use tracing::{debug, info};

use crate::cli::InputArgs;

/// Load configuration and apply command-line overrides.
///
/// When nothing can be loaded but both a path and `--week-start` were given,
/// the run proceeds on defaults.
pub fn load_config(config_path: Option<&Path>, input: &InputArgs) -> anyhow::Result<AppConfig> {
    let loaded = match config_path {
        Some(path) => config::load_from_file(Some(path.to_path_buf())),
        None => config::load(),
    };

    let mut app_config = match (loaded, &input.path, input.week_start) {
        (Ok(app_config), _, _) => app_config,
        (Err(err), Some(path), Some(week_start)) if config_path.is_none() => {
            debug!(error = %err, "no configuration found, using command-line input");
            AppConfig {
                timetable: TimetableConfig {
                    source_path: path.clone(),
                    time_zone: DEFAULT_TIME_ZONE,
                    week_start: Some(week_start),
                    anchors: None,
                    anchor_policy: Default::default(),
                    pairing: Default::default(),
                },
                calendar: CalendarConfig::default(),
                logging: LoggingConfig::default(),
            }
        }
        (Err(err), _, _) => return Err(err).context("failed to load configuration"),
    };

    apply_overrides(&mut app_config.timetable, input);
    Ok(app_config)
}

fn apply_overrides(timetable: &mut TimetableConfig, input: &InputArgs) {
    if let Some(path) = &input.path {
        timetable.source_path.clone_from(path);
    }
    if let Some(week_start) = input.week_start {
        timetable.week_start = Some(week_start);
        timetable.anchors = None;
    }
}

fn parser_for(timetable: &TimetableConfig) -> TimetableParser {
    TimetableParser::new(ParserSettings::from(timetable))
}

fn parse_only(app_config: &AppConfig) -> anyhow::Result<TimetableParse> {
    let timetable = &app_config.timetable;
    let anchors = timetable.resolve_anchors()?;
    let text = FileTextSource::new()
        .extract(&timetable.source_path)
        .with_context(|| format!("failed to read {}", timetable.source_path.display()))?;
    Ok(parser_for(timetable).parse(&text, &anchors)?)
}

/// `classcal parse`: print events and diagnostics as JSON.
pub fn parse(app_config: &AppConfig, pretty: bool) -> anyhow::Result<()> {
    let parsed = parse_only(app_config)?;
    info!(
        events = parsed.events.len(),
        diagnostics = parsed.diagnostics.len(),
        "parsed timetable"
    );

    let output = if pretty {
        serde_json::to_string_pretty(&parsed)?
    } else {
        serde_json::to_string(&parsed)?
    };
    println!("{output}");
    Ok(())
}

/// `classcal publish`: returns `false` when any event failed to publish.
pub async fn publish(app_config: &AppConfig, dry_run: bool) -> anyhow::Result<bool> {
    if dry_run {
        let parsed = parse_only(app_config)?;
        print_diagnostics(&parsed);
        for event in &parsed.events {
            println!(
                "would publish: {} {} ({})",
                event.start().date_time().format("%a %Y-%m-%d %H:%M"),
                event.summary(),
                event.start().time_zone()
            );
        }
        return Ok(true);
    }

    let timetable = &app_config.timetable;
    let calendar = &app_config.calendar;
    let anchors = timetable.resolve_anchors()?;
    let session = StaticTokenSession::resolve(calendar.access_token.as_deref())?;
    let publisher = GoogleCalendarPublisher::from_config(calendar, Arc::new(session))?;

    let service = ImportService::new(
        Arc::new(FileTextSource::new()),
        Arc::new(publisher),
        parser_for(timetable),
        anchors,
    );
    let report = service
        .run(&timetable.source_path, calendar.concurrency)
        .await
        .with_context(|| format!("failed to import {}", timetable.source_path.display()))?;

    print_diagnostics(&report.parse);
    print_publish_report(&report.publish);
    Ok(report.publish.is_success())
}

fn print_diagnostics(parsed: &TimetableParse) {
    for diagnostic in &parsed.diagnostics {
        println!("skipped {diagnostic}");
    }
}

fn print_publish_report(report: &PublishReport) {
    for failure in &report.failures {
        println!("failed #{} {}: {}", failure.index, failure.summary, failure.error);
    }
    println!("published {} event(s), {} failed", report.published.len(), report.failures.len());
}
