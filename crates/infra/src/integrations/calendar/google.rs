//! Google Calendar event publisher

use std::sync::Arc;

use async_trait::async_trait;
use classcal_core::{AuthorizedSession, EventPublisher, PublishedEvent};
use classcal_domain::{CalendarConfig, ClassCalError, ClassEvent, Result};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::errors::conversions::status_to_error;
use crate::http::HttpClient;

/// Creates one Google Calendar event per class event.
///
/// Every insert carries an id derived from the calendar and the event, so a
/// retried or repeated insert of the same class is answered with `409
/// Conflict` instead of creating a second entry.
pub struct GoogleCalendarPublisher {
    http: HttpClient,
    session: Arc<dyn AuthorizedSession>,
    calendar_id: String,
    events_url: String,
}

impl GoogleCalendarPublisher {
    pub fn new(
        http: HttpClient,
        session: Arc<dyn AuthorizedSession>,
        api_base_url: &str,
        calendar_id: &str,
    ) -> Self {
        let events_url = format!(
            "{}/calendars/{}/events",
            api_base_url.trim_end_matches('/'),
            urlencoding::encode(calendar_id)
        );
        Self { http, session, calendar_id: calendar_id.to_string(), events_url }
    }

    /// # Errors
    /// Fails if the HTTP client cannot be constructed.
    pub fn from_config(config: &CalendarConfig, session: Arc<dyn AuthorizedSession>) -> Result<Self> {
        let http = HttpClient::from_config(config)?;
        Ok(Self::new(http, session, &config.api_base_url, &config.calendar_id))
    }

    pub fn events_url(&self) -> &str {
        &self.events_url
    }

    /// Client-side event id for `event` in this publisher's calendar.
    pub fn event_id(&self, event: &ClassEvent) -> String {
        event_id(&self.calendar_id, event)
    }
}

/// Deterministic Google event id: lowercase hex SHA-256 of the calendar id,
/// summary, local start and time zone.
///
/// Hex digits are a subset of the base32hex alphabet Google requires.
pub fn event_id(calendar_id: &str, event: &ClassEvent) -> String {
    let start = event.start();
    let mut hasher = Sha256::new();
    for part in [
        calendar_id,
        event.summary(),
        start.date_time().format("%Y-%m-%dT%H:%M:%S").to_string().as_str(),
        start.time_zone().name(),
    ] {
        hasher.update(part.as_bytes());
        hasher.update(b"\x1f");
    }
    hex::encode(hasher.finalize())
}

#[async_trait]
impl EventPublisher for GoogleCalendarPublisher {
    async fn publish(&self, event: &ClassEvent) -> Result<PublishedEvent> {
        let access_token = self.session.access_token().await?;
        let id = self.event_id(event);

        debug!(summary = event.summary(), id = %id, url = %self.events_url, "inserting calendar event");

        let body = GoogleEventInsert { id: &id, event };
        let request =
            self.http.request(Method::POST, &self.events_url).bearer_auth(access_token).json(&body);
        let response = self.http.send(request).await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            info!(summary = event.summary(), id = %id, "calendar event already present");
            return Ok(PublishedEvent { remote_id: id, html_link: None });
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(status_to_error(status, "Google Calendar insert failed", &error_text));
        }

        let created: GoogleCreatedEvent = response.json().await.map_err(|e| {
            ClassCalError::Publish(format!("Failed to parse Google response: {e}"))
        })?;

        Ok(PublishedEvent { remote_id: created.id, html_link: created.html_link })
    }
}

#[derive(Serialize)]
struct GoogleEventInsert<'a> {
    id: &'a str,
    #[serde(flatten)]
    event: &'a ClassEvent,
}

#[derive(Debug, Deserialize)]
struct GoogleCreatedEvent {
    id: String,
    #[serde(rename = "htmlLink")]
    html_link: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use chrono_tz::Tz;

    use super::*;

    fn class(summary: &str, hour: u32) -> ClassEvent {
        ClassEvent::new(
            summary,
            NaiveDate::from_ymd_opt(2024, 6, 24).unwrap(),
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            Tz::Asia__Kolkata,
        )
        .unwrap()
    }

    #[test]
    fn event_id_is_stable_and_base32hex() {
        let id = event_id("primary", &class("MATH101", 9));

        assert_eq!(id, event_id("primary", &class("MATH101", 9)));
        assert_eq!(id.len(), 64);
        assert!(id.chars().all(|c| matches!(c, '0'..='9' | 'a'..='v')));
    }

    #[test]
    fn event_id_depends_on_calendar_summary_and_start() {
        let base = event_id("primary", &class("MATH101", 9));

        assert_ne!(base, event_id("classes", &class("MATH101", 9)));
        assert_ne!(base, event_id("primary", &class("PHY101", 9)));
        assert_ne!(base, event_id("primary", &class("MATH101", 10)));
    }
}
