//! UTF-8 text files, for timetables already converted to text

use std::path::Path;

use classcal_core::TextSource;
use classcal_domain::Result;
use tracing::debug;

use super::ensure_file;
use crate::errors::InfraError;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract(&self, path: &Path) -> Result<String> {
        ensure_file(path)?;
        let text = std::fs::read_to_string(path).map_err(InfraError::from)?;
        debug!(path = %path.display(), chars = text.len(), "read timetable text");
        Ok(text)
    }
}
