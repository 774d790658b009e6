//! PDF text extraction via `pdf-extract`

use std::path::Path;

use classcal_core::TextSource;
use classcal_domain::{ClassCalError, Result};
use tracing::debug;

use super::ensure_file;
use crate::errors::InfraError;

/// Extracts the text of every page, in page order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextSource;

impl TextSource for PdfTextSource {
    fn extract(&self, path: &Path) -> Result<String> {
        ensure_file(path)?;

        // pdf_extract can panic on malformed documents
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            pdf_extract::extract_text(path)
        }));

        match result {
            Ok(Ok(text)) => {
                debug!(path = %path.display(), chars = text.len(), "extracted PDF text");
                Ok(text)
            }
            Ok(Err(err)) => Err(InfraError::from(err).into()),
            Err(_) => Err(ClassCalError::Extraction(format!(
                "PDF extraction panicked on malformed document {}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn missing_file_is_an_extraction_error() {
        let err = PdfTextSource.extract(Path::new("/nonexistent/timetable.pdf")).unwrap_err();
        assert_eq!(err, ClassCalError::Extraction("/nonexistent/timetable.pdf not found".into()));
    }

    #[test]
    fn garbage_bytes_are_an_extraction_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"this is not a pdf").unwrap();

        let err = PdfTextSource.extract(file.path()).unwrap_err();
        assert!(matches!(err, ClassCalError::Extraction(_)), "got {err:?}");
    }
}
