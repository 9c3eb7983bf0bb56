use common::ErrorLocation;

use thiserror::Error;

/// Errors that can occur while running the places application.
///
/// Pipeline errors (fetch failures) never reach this type; they are
/// presented to the display surface as notifications. This enum covers the
/// wiring around the pipeline: logging, argument validation, and the intent
/// channel.
#[derive(Debug, Error)]
pub enum PlacesAppError {
    /// Application wiring failure (logger, runtime)
    #[error("Places Error: {message} {location}")]
    Places {
        message: String,
        location: ErrorLocation,
    },

    /// Error from places-core operations (service construction, intent channel)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Rejected user input, caught before it reaches the interactor
    #[error("Invalid Input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },
}

impl From<places_core::error::CoreError> for PlacesAppError {
    #[track_caller]
    fn from(error: places_core::error::CoreError) -> Self {
        PlacesAppError::Core {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<places_core::error::location_service::LocationServiceError> for PlacesAppError {
    #[track_caller]
    fn from(error: places_core::error::location_service::LocationServiceError) -> Self {
        PlacesAppError::Core {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<places_core::error::interactor::InteractorError> for PlacesAppError {
    #[track_caller]
    fn from(error: places_core::error::interactor::InteractorError) -> Self {
        PlacesAppError::Core {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
