//! Input validation owned by the calling surface.
//!
//! The interactor's add operation assumes a usable name; the surface is
//! responsible for refusing the intent before it is sent, the same way the
//! add sheet keeps its button disabled until the field is non-empty.

/// Whether a proposed location name is acceptable: non-empty after trimming
/// surrounding whitespace.
pub fn is_valid_location_name(name: &str) -> bool {
    !name.trim().is_empty()
}
