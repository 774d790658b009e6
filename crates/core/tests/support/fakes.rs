use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use classcal_core::{EventPublisher, PublishedEvent, TextSource};
use classcal_domain::{ClassCalError, ClassEvent, Result};

/// In-memory `TextSource` keyed by path.
#[derive(Default, Clone)]
pub struct InMemoryTextSource {
    documents: HashMap<PathBuf, String>,
}

impl InMemoryTextSource {
    pub fn with_document(mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        self.documents.insert(path.into(), text.into());
        self
    }
}

impl TextSource for InMemoryTextSource {
    fn extract(&self, path: &Path) -> Result<String> {
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| ClassCalError::Extraction(format!("{} not found", path.display())))
    }
}

/// Publisher that records every event and rejects chosen summaries.
#[derive(Default, Clone)]
pub struct RecordingPublisher {
    published: Arc<Mutex<Vec<ClassEvent>>>,
    rejected: HashSet<String>,
}

impl RecordingPublisher {
    pub fn rejecting(summaries: &[&str]) -> Self {
        Self {
            published: Arc::default(),
            rejected: summaries.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn published(&self) -> Vec<ClassEvent> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &ClassEvent) -> Result<PublishedEvent> {
        if self.rejected.contains(event.summary()) {
            return Err(ClassCalError::Network(format!("rejected {}", event.summary())));
        }

        let mut published = self.published.lock().unwrap();
        published.push(event.clone());
        Ok(PublishedEvent { remote_id: format!("evt-{}", published.len()), html_link: None })
    }
}
