//! Error type for path resolution.

use std::error::Error;
use std::fmt;

/// A failed path resolution.
///
/// Every failure mode is surfaced as a distinct message naming the offending
/// segment, with the underlying error (a parse failure, decode failure, or
/// access failure) preserved as the source where one exists.
#[derive(Debug)]
pub struct PathError {
    message: String,
    cause: Option<Box<dyn Error + Send + Sync>>,
}

impl PathError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for PathError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn Error + 'static))
    }
}
