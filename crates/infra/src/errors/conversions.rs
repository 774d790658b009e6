//! Conversions from external infrastructure errors into domain errors.

use classcal_domain::ClassCalError;
use reqwest::Error as HttpError;
use reqwest::StatusCode;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ClassCalError);

impl From<InfraError> for ClassCalError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ClassCalError> for InfraError {
    fn from(value: ClassCalError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoClassCalError {
    fn into_classcal(self) -> ClassCalError;
}

/// Map an HTTP status (plus response body, if any) onto the domain error.
pub fn status_to_error(status: StatusCode, context: &str, body: &str) -> ClassCalError {
    let code = status.as_u16();
    let message = if body.trim().is_empty() {
        format!("{context}: HTTP {code} {}", status.canonical_reason().unwrap_or("unknown status"))
    } else {
        format!("{context}: HTTP {code}: {}", body.trim())
    };

    match code {
        401 | 403 => ClassCalError::Auth(message),
        404 => ClassCalError::NotFound(message),
        429 => ClassCalError::Network(message),
        400..=499 => ClassCalError::InvalidInput(message),
        _ => ClassCalError::Network(message),
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ClassCalError */
/* -------------------------------------------------------------------------- */

impl IntoClassCalError for HttpError {
    fn into_classcal(self) -> ClassCalError {
        if self.is_timeout() {
            return ClassCalError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ClassCalError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return status_to_error(status, "request failed", "");
        }

        if self.is_decode() {
            return ClassCalError::Publish(format!("unexpected response body: {self}"));
        }

        ClassCalError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_classcal())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ClassCalError */
/* -------------------------------------------------------------------------- */

impl IntoClassCalError for std::io::Error {
    fn into_classcal(self) -> ClassCalError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => ClassCalError::Extraction(format!("file not found: {self}")),
            ErrorKind::InvalidData => {
                ClassCalError::Extraction(format!("content cannot be decoded: {self}"))
            }
            ErrorKind::PermissionDenied => {
                ClassCalError::Extraction(format!("permission denied: {self}"))
            }
            _ => ClassCalError::Extraction(self.to_string()),
        }
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_classcal())
    }
}

/* -------------------------------------------------------------------------- */
/* pdf_extract::OutputError → ClassCalError */
/* -------------------------------------------------------------------------- */

impl IntoClassCalError for pdf_extract::OutputError {
    fn into_classcal(self) -> ClassCalError {
        ClassCalError::Extraction(format!("PDF text extraction failed: {self}"))
    }
}

impl From<pdf_extract::OutputError> for InfraError {
    fn from(value: pdf_extract::OutputError) -> Self {
        InfraError(value.into_classcal())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
