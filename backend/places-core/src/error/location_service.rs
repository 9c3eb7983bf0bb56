use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

/// Failures of the single fetch against the locations feed.
///
/// Transport, status, and decode failures are kept apart so logs say which
/// layer broke, but they all surface to the display layer as one fetch
/// failure.
#[derive(Debug, Clone, ThisError)]
pub enum LocationServiceError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },
}

impl From<reqwest::Error> for LocationServiceError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        LocationServiceError::Http {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<serde_json::Error> for LocationServiceError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        LocationServiceError::Json {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<url::ParseError> for LocationServiceError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        LocationServiceError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
