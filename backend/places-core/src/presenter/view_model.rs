use crate::models::Location;

use uuid::Uuid;

/// Display-ready location list.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationsViewModel {
    pub locations: Vec<Location>,
}

/// Display-ready fetch failure.
///
/// Carries the originating `ErrorWrapper`'s id so surfaces can diff repeated
/// failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorViewModel {
    pub id: Uuid,
    pub message: String,
}
