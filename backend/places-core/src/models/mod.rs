//! Domain models for the places pipeline.
//!
//! Pure data structures with no business logic. The interactor owns the
//! authoritative `Location` collection; everything else only sees values it
//! is explicitly handed.

pub mod error_wrapper;
pub mod location;

pub use error_wrapper::ErrorWrapper;
pub use location::{Coordinate, Location, LocationsWrapper};
