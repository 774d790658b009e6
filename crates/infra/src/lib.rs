//! # ClassCal Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - Document text extraction (PDF and plain text)
//! - HTTP client with retry support
//! - Google Calendar event publishing
//! - Configuration loading and logging setup
//!
//! ## Architecture
//! - Implements traits defined in `classcal-core`
//! - Depends on `classcal-domain` and `classcal-core`
//! - Contains all "impure" code (filesystem, network, process environment)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;
pub mod observability;
pub mod text_source;

// Re-export commonly used items
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use integrations::calendar::{GoogleCalendarPublisher, StaticTokenSession};
pub use observability::init_tracing;
pub use text_source::{FileTextSource, PdfTextSource, PlainTextSource};
