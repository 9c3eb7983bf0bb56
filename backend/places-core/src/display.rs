//! The contract a display surface implements to receive pipeline output.
//!
//! Rendering itself (map, list, sheets) lives outside this crate; the
//! pipeline only ever hands a surface finished view models. Implementations
//! are called from the interactor's worker task, one call at a time, and
//! must guard any interior state they keep.

use crate::presenter::view_model::{ErrorViewModel, LocationsViewModel};

use crate::models::Location;

pub trait PlacesDisplayLogic: Send + Sync {
    /// Replace the rendered location list.
    fn display_locations(&self, view_model: LocationsViewModel);

    /// Show a fetch failure. Exactly one call per failed fetch.
    fn display_error(&self, view_model: ErrorViewModel);

    /// Update (or clear) the highlighted location.
    fn display_selected_location(&self, location: Option<Location>);

    /// Open the given location externally (deep link). Construction of the
    /// link is the surface's job; failures to open are not reported back.
    fn display_open_wikipedia(&self, location: Location);
}
