//! Recording doubles for the pipeline seams.
//!
//! `StubLocationService` cans the fetch outcome; the recorders capture every
//! call the interactor or presenter makes so tests assert on exact call
//! sequences, mirroring how the display surface would observe the pipeline.

use crate::display::PlacesDisplayLogic;
use crate::error::location_service::LocationServiceError;
use crate::location_service::LocationService;
use crate::models::{Coordinate, ErrorWrapper, Location};
use crate::presenter::PlacesPresentationLogic;
use crate::presenter::view_model::{ErrorViewModel, LocationsViewModel};

use std::sync::{Arc, Mutex};

use uuid::Uuid;

pub fn location(name: &str, latitude: f64, longitude: f64) -> Location {
    Location::new(
        name,
        Coordinate {
            latitude,
            longitude,
        },
    )
}

pub fn unnamed_location() -> Location {
    Location {
        id: Uuid::new_v4(),
        name: None,
        latitude: None,
        longitude: None,
    }
}

/// `LocationService` returning a canned result.
pub struct StubLocationService {
    pub result: Result<Vec<Location>, LocationServiceError>,
}

impl LocationService for StubLocationService {
    async fn fetch_locations(&self) -> Result<Vec<Location>, LocationServiceError> {
        self.result.clone()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PresenterLog {
    pub locations: Vec<Vec<Location>>,
    pub errors: Vec<ErrorWrapper>,
    pub selections: Vec<Option<Location>>,
    pub wikipedia: Vec<Location>,
}

/// Presenter double recording every call, shareable with the test body.
#[derive(Clone, Default)]
pub struct RecordingPresenter(Arc<Mutex<PresenterLog>>);

impl RecordingPresenter {
    pub fn snapshot(&self) -> PresenterLog {
        self.0.lock().unwrap().clone()
    }
}

impl PlacesPresentationLogic for RecordingPresenter {
    fn present_locations(&self, locations: &[Location]) {
        self.0.lock().unwrap().locations.push(locations.to_vec());
    }

    fn present_error(&self, error: &ErrorWrapper) {
        self.0.lock().unwrap().errors.push(error.clone());
    }

    fn present_selected_location(&self, location: Option<&Location>) {
        self.0.lock().unwrap().selections.push(location.cloned());
    }

    fn present_open_wikipedia(&self, location: &Location) {
        self.0.lock().unwrap().wikipedia.push(location.clone());
    }
}

#[derive(Debug, Clone, Default)]
pub struct DisplayLog {
    pub locations: Vec<LocationsViewModel>,
    pub errors: Vec<ErrorViewModel>,
    pub selections: Vec<Option<Location>>,
    pub wikipedia: Vec<Location>,
}

/// Display-surface double recording every call.
#[derive(Default)]
pub struct RecordingDisplay(Mutex<DisplayLog>);

impl RecordingDisplay {
    pub fn snapshot(&self) -> DisplayLog {
        self.0.lock().unwrap().clone()
    }
}

impl PlacesDisplayLogic for RecordingDisplay {
    fn display_locations(&self, view_model: LocationsViewModel) {
        self.0.lock().unwrap().locations.push(view_model);
    }

    fn display_error(&self, view_model: ErrorViewModel) {
        self.0.lock().unwrap().errors.push(view_model);
    }

    fn display_selected_location(&self, location: Option<Location>) {
        self.0.lock().unwrap().selections.push(location);
    }

    fn display_open_wikipedia(&self, location: Location) {
        self.0.lock().unwrap().wikipedia.push(location);
    }
}
