//! The terminal display surface.
//!
//! Implements the pipeline's display contract over a snapshot of rendered
//! state. Presentation calls arrive one at a time from the interactor's
//! worker task; the snapshot is guarded anyway so the main task can read it
//! while the worker writes.

use crate::wikipedia;

use places_core::display::PlacesDisplayLogic;
use places_core::models::Location;
use places_core::presenter::view_model::{ErrorViewModel, LocationsViewModel};

use std::sync::RwLock;

use log::{info, warn};
use tokio::sync::watch;

/// Label rendered for feed entries without a name.
const UNKNOWN_NAME_LABEL: &str = "Unknown";

#[derive(Debug, Default)]
struct DisplayState {
    locations: Vec<Location>,
    error: Option<ErrorViewModel>,
    selected: Option<Location>,
    deep_links: Vec<String>,
}

/// Display surface that renders the location list as text.
///
/// Keeps the latest pipeline output and renders it on demand. A `watch`
/// channel ticks on every display call so the driving task can await the
/// outcome of an intent it has sent.
pub struct TerminalDisplay {
    state: RwLock<DisplayState>,
    revision: watch::Sender<u64>,
}

impl Default for TerminalDisplay {
    fn default() -> Self {
        Self {
            state: RwLock::new(DisplayState::default()),
            revision: watch::channel(0).0,
        }
    }
}

impl TerminalDisplay {
    /// Subscribe to display updates. Each presentation call bumps the
    /// revision, so `changed().await` resolves once the next pipeline
    /// outcome has been rendered into the snapshot.
    pub fn updates(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    pub fn location_at(&self, index: usize) -> Option<Location> {
        self.state.read().unwrap().locations.get(index).cloned()
    }

    pub fn location_count(&self) -> usize {
        self.state.read().unwrap().locations.len()
    }

    pub fn current_error(&self) -> Option<ErrorViewModel> {
        self.state.read().unwrap().error.clone()
    }

    /// Render the current snapshot to stdout.
    pub fn render(&self) {
        let state = self.state.read().unwrap();

        if let Some(error) = &state.error {
            println!("Error: {}", error.message);
        }

        println!("{} locations:", state.locations.len());
        for (index, location) in state.locations.iter().enumerate() {
            let marker = if state.selected.as_ref() == Some(location) {
                '>'
            } else {
                ' '
            };
            println!("{marker} {}. {}", index + 1, format_location(location));
        }

        for link in &state.deep_links {
            println!("Open externally: {link}");
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}

impl PlacesDisplayLogic for TerminalDisplay {
    fn display_locations(&self, view_model: LocationsViewModel) {
        self.state.write().unwrap().locations = view_model.locations;
        self.bump();
    }

    fn display_error(&self, view_model: ErrorViewModel) {
        self.state.write().unwrap().error = Some(view_model);
        self.bump();
    }

    fn display_selected_location(&self, location: Option<Location>) {
        self.state.write().unwrap().selected = location;
        self.bump();
    }

    fn display_open_wikipedia(&self, location: Location) {
        match wikipedia::deep_link(&location) {
            Ok(url) => {
                info!("Opening externally: {url}");
                self.state.write().unwrap().deep_links.push(url.into());
            }
            Err(error) => warn!("Could not build deep link: {error}"),
        }
        self.bump();
    }
}

/// One rendered line per location; nameless entries get a stand-in label.
pub fn format_location(location: &Location) -> String {
    let name = location.name.as_deref().unwrap_or(UNKNOWN_NAME_LABEL);
    match (location.latitude, location.longitude) {
        (Some(latitude), Some(longitude)) => format!("{name} ({latitude}, {longitude})"),
        _ => String::from(name),
    }
}
