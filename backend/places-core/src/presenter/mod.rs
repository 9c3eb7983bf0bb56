//! The presentation formatter.
//!
//! Translates interactor outputs into view models and routes them to the
//! display surface. Shape transforms only: no filtering, no sorting, no
//! validation.

pub mod view_model;

use crate::display::PlacesDisplayLogic;
use crate::models::{ErrorWrapper, Location};

use std::sync::{Arc, Weak};

use log::debug;

use view_model::{ErrorViewModel, LocationsViewModel};

/// The method set the interactor reports its outcomes through.
pub trait PlacesPresentationLogic: Send + Sync {
    fn present_locations(&self, locations: &[Location]);
    fn present_error(&self, error: &ErrorWrapper);
    fn present_selected_location(&self, location: Option<&Location>);
    fn present_open_wikipedia(&self, location: &Location);
}

/// Formats interactor outputs for one display surface.
///
/// Holds a non-owning reference to the surface: the presenter never controls
/// the surface's lifetime, and once the surface is dropped every
/// presentation call becomes a silent no-op.
pub struct PlacesPresenter {
    view: Weak<dyn PlacesDisplayLogic>,
}

impl PlacesPresenter {
    pub fn new(view: Weak<dyn PlacesDisplayLogic>) -> Self {
        Self { view }
    }

    fn view(&self) -> Option<Arc<dyn PlacesDisplayLogic>> {
        let view = self.view.upgrade();
        if view.is_none() {
            debug!("Display surface dropped; skipping presentation call");
        }
        view
    }
}

impl PlacesPresentationLogic for PlacesPresenter {
    fn present_locations(&self, locations: &[Location]) {
        if let Some(view) = self.view() {
            view.display_locations(LocationsViewModel {
                locations: locations.to_vec(),
            });
        }
    }

    fn present_error(&self, error: &ErrorWrapper) {
        if let Some(view) = self.view() {
            view.display_error(ErrorViewModel {
                id: error.id,
                message: error.message.clone(),
            });
        }
    }

    fn present_selected_location(&self, location: Option<&Location>) {
        if let Some(view) = self.view() {
            view.display_selected_location(location.cloned());
        }
    }

    fn present_open_wikipedia(&self, location: &Location) {
        if let Some(view) = self.view() {
            view.display_open_wikipedia(location.clone());
        }
    }
}
