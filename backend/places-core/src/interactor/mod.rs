//! Business logic for the places pipeline.
//!
//! The interactor is the single owner of the current location collection.
//! Every mutating intent goes through it, and every outcome leaves through
//! the presenter. Calling surfaces that can issue concurrent intents go
//! through [`PlacesHandle`], which serializes them on a dedicated task.

pub mod handle;

pub use handle::{PlacesHandle, PlacesIntent};

use crate::location_service::LocationService;
use crate::models::{Coordinate, ErrorWrapper, Location};
use crate::presenter::PlacesPresentationLogic;

use std::collections::BTreeSet;

use log::{info, warn};

/// Owner of the authoritative location collection and current selection.
///
/// Generic over the fetch seam so tests can substitute a canned service.
/// Fetch is the only fallible operation; add/delete/select never fail once
/// invoked.
pub struct PlacesInteractor<S> {
    service: S,
    presenter: Box<dyn PlacesPresentationLogic>,
    locations: Vec<Location>,
    selected: Option<Location>,
}

impl<S: LocationService> PlacesInteractor<S> {
    pub fn new(service: S, presenter: Box<dyn PlacesPresentationLogic>) -> Self {
        Self {
            service,
            presenter,
            locations: Vec::new(),
            selected: None,
        }
    }

    /// The owned collection, in fetch/append order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn selected_location(&self) -> Option<&Location> {
        self.selected.as_ref()
    }

    /// Fetch the feed and replace the owned collection with the result.
    ///
    /// On failure the collection is left untouched and exactly one error is
    /// presented; there is no retry.
    pub async fn fetch_locations(&mut self) {
        match self.service.fetch_locations().await {
            Ok(locations) => {
                self.locations = locations;
                self.presenter.present_locations(&self.locations);
            }
            Err(error) => {
                warn!("Fetch failed: {error}");
                let wrapper = ErrorWrapper::with_cause(
                    format!("Failed to fetch locations: {error}"),
                    error,
                );
                self.presenter.present_error(&wrapper);
            }
        }
    }

    /// Append a new location and report it as the selection.
    ///
    /// Precondition: `name` is non-empty after trimming. The calling surface
    /// enforces this before sending the intent.
    pub fn add_location(&mut self, name: &str, coordinate: Coordinate) {
        let location = Location::new(name, coordinate);
        info!("Adding location {:?} at {coordinate:?}", location.name);

        self.locations.push(location.clone());
        self.presenter.present_locations(&self.locations);

        self.selected = Some(location.clone());
        self.presenter.present_selected_location(Some(&location));
    }

    /// Remove the entries at the given positions and clear the selection.
    ///
    /// All positions are removed in a single rebuild; no partial removal is
    /// ever observable. Out-of-range positions are ignored.
    pub fn delete_locations(&mut self, offsets: &BTreeSet<usize>) {
        info!("Deleting {} locations", offsets.len());

        let mut index = 0;
        self.locations.retain(|_| {
            let keep = !offsets.contains(&index);
            index += 1;
            keep
        });

        self.selected = None;
        self.presenter.present_locations(&self.locations);
        self.presenter.present_selected_location(None);
    }

    /// Record and report the current selection. Idempotent; selecting the
    /// same location twice reports it twice.
    pub fn select_location(&mut self, location: Location) {
        self.selected = Some(location.clone());
        self.presenter.present_selected_location(Some(&location));
    }

    /// Forward the open-externally intent for one location. No state change;
    /// the display surface owns the deep link.
    pub fn open_wikipedia(&self, location: &Location) {
        self.presenter.present_open_wikipedia(location);
    }
}
