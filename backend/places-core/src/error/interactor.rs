use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Failures of the intent channel between a calling surface and the
/// interactor's worker task.
#[derive(Debug, ThisError)]
pub enum InteractorError {
    /// The worker task is gone, so the intent cannot be delivered.
    #[error("Intent Channel Closed: {message} {location}")]
    IntentChannelClosed {
        message: String,
        location: ErrorLocation,
    },
}
