use std::error::Error;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::sync::Arc;

use uuid::Uuid;

/// A wrapper for errors that can be shown by the display surface.
///
/// Equality is defined by `id` alone: two wrappers built from identical
/// messages are never equal. Display surfaces rely on this for diffing, so a
/// repeated failure produces a fresh, distinct notification each time.
#[derive(Debug, Clone)]
pub struct ErrorWrapper {
    pub id: Uuid,
    pub message: String,
    pub underlying_error: Option<Arc<dyn Error + Send + Sync>>,
}

impl ErrorWrapper {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            underlying_error: None,
        }
    }

    pub fn with_cause(
        message: impl Into<String>,
        underlying_error: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            underlying_error: Some(Arc::new(underlying_error)),
        }
    }
}

impl PartialEq for ErrorWrapper {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorWrapper {}

impl Display for ErrorWrapper {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{}", self.message)
    }
}

impl Error for ErrorWrapper {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.underlying_error
            .as_deref()
            .map(|error| error as &(dyn Error + 'static))
    }
}
