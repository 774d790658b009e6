//! Port interfaces for the timetable import boundary

use std::path::Path;

use async_trait::async_trait;
use classcal_domain::{ClassEvent, Result};
use serde::Serialize;

/// Trait for turning a document on disk into plain text
pub trait TextSource: Send + Sync {
    /// Extract the full text of the document at `path`, page order preserved.
    ///
    /// # Errors
    /// Returns `ClassCalError::Extraction` if the path does not exist or its
    /// content cannot be decoded.
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Remote record created for one published event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedEvent {
    pub remote_id: String,
    pub html_link: Option<String>,
}

/// Trait for persisting class events in a remote calendar
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Create one remote calendar entry for `event`.
    async fn publish(&self, event: &ClassEvent) -> Result<PublishedEvent>;
}

/// Opaque authorized session used by publishers
///
/// Acquiring and refreshing credentials happens elsewhere; implementations
/// only hand out a currently valid bearer token.
#[async_trait]
pub trait AuthorizedSession: Send + Sync {
    async fn access_token(&self) -> Result<String>;
}
