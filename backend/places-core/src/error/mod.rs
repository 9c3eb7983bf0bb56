pub mod interactor;
pub mod location_service;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    LocationService(#[from] location_service::LocationServiceError),

    #[error(transparent)]
    Interactor(#[from] interactor::InteractorError),
}
