//! Import service - orchestrates text source, parser and publisher

use std::path::Path;
use std::sync::Arc;

use classcal_domain::{ClassCalError, ClassEvent, Result, TimetableParse, WeekdayAnchors};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{info, warn};

use super::ports::{EventPublisher, PublishedEvent, TextSource};
use crate::timetable::TimetableParser;

/// Event that the publisher rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishFailure {
    /// Position of the event in the parsed sequence.
    pub index: usize,
    pub summary: String,
    pub error: ClassCalError,
}

/// Outcome of publishing a batch, ordered by event index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    pub published: Vec<(usize, PublishedEvent)>,
    pub failures: Vec<PublishFailure>,
}

impl PublishReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of a full import run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub parse: TimetableParse,
    pub publish: PublishReport,
}

/// Service running the extract → parse → publish pipeline
pub struct ImportService {
    source: Arc<dyn TextSource>,
    publisher: Arc<dyn EventPublisher>,
    parser: TimetableParser,
    anchors: WeekdayAnchors,
}

impl ImportService {
    /// Create a new import service
    pub fn new(
        source: Arc<dyn TextSource>,
        publisher: Arc<dyn EventPublisher>,
        parser: TimetableParser,
        anchors: WeekdayAnchors,
    ) -> Self {
        Self { source, publisher, parser, anchors }
    }

    /// Extract and parse the timetable at `path` without publishing.
    ///
    /// # Errors
    /// Extraction errors are returned unchanged; configuration errors come
    /// from the parser.
    pub fn parse_file(&self, path: &Path) -> Result<TimetableParse> {
        let text = self.source.extract(path)?;
        info!(path = %path.display(), chars = text.len(), "extracted timetable text");
        self.parser.parse(&text, &self.anchors)
    }

    /// Publish every event, at most `concurrency` at a time.
    ///
    /// Each event is attempted independently; a failure is recorded and the
    /// remaining events are still published.
    pub async fn publish(&self, events: &[ClassEvent], concurrency: usize) -> PublishReport {
        let publisher = &self.publisher;
        let mut results: Vec<(usize, Result<PublishedEvent>)> = stream::iter(events.iter().enumerate())
            .map(|(index, event)| async move { (index, publisher.publish(event).await) })
            .buffer_unordered(concurrency.max(1))
            .collect()
            .await;
        results.sort_by_key(|(index, _)| *index);

        let mut report = PublishReport::default();
        for (index, result) in results {
            match result {
                Ok(published) => report.published.push((index, published)),
                Err(error) => {
                    let summary = events[index].summary().to_string();
                    warn!(index, summary = %summary, error = %error, "failed to publish event");
                    report.failures.push(PublishFailure { index, summary, error });
                }
            }
        }

        info!(
            published = report.published.len(),
            failed = report.failures.len(),
            "published class events"
        );
        report
    }

    /// Extract, parse and publish the timetable at `path`.
    ///
    /// # Errors
    /// Only extraction and configuration errors abort the run; per-day,
    /// per-subject and per-event problems are part of the report.
    pub async fn run(&self, path: &Path, concurrency: usize) -> Result<ImportReport> {
        let parse = self.parse_file(path)?;
        let publish = self.publish(&parse.events, concurrency).await;
        Ok(ImportReport { parse, publish })
    }
}
