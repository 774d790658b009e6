//! # ClassCal Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The timetable parser (text → class events + diagnostics)
//! - Port/adapter interfaces (traits) for text sources and publishers
//! - The import service wiring them together
//!
//! ## Architecture Principles
//! - Only depends on `classcal-domain`
//! - No filesystem, HTTP, or platform code
//! - All external dependencies via traits

pub mod import;
pub mod timetable;

pub use import::{
    AuthorizedSession, EventPublisher, ImportReport, ImportService, PublishFailure,
    PublishReport, PublishedEvent, TextSource,
};
pub use timetable::{ParserSettings, TimetableParser};
