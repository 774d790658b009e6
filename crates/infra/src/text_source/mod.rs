//! Text sources: documents on disk → raw timetable text
//!
//! Implements the `TextSource` port from `classcal-core`.

pub mod pdf;
pub mod plain;

use std::path::Path;

use classcal_core::TextSource;
use classcal_domain::{ClassCalError, Result};

pub use pdf::PdfTextSource;
pub use plain::PlainTextSource;

/// Picks PDF or plain-text extraction by file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTextSource {
    pdf: PdfTextSource,
    plain: PlainTextSource,
}

impl FileTextSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TextSource for FileTextSource {
    fn extract(&self, path: &Path) -> Result<String> {
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

        if is_pdf {
            self.pdf.extract(path)
        } else {
            self.plain.extract(path)
        }
    }
}

/// Fail with an extraction error when `path` is not an existing file.
pub(crate) fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ClassCalError::Extraction(format!("{} not found", path.display())))
    }
}
