//! Timetable import: extract text, parse it, publish the events

pub mod ports;
pub mod service;

pub use ports::{AuthorizedSession, EventPublisher, PublishedEvent, TextSource};
pub use service::{ImportReport, ImportService, PublishFailure, PublishReport};
