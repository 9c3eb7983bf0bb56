//! Serialized intent dispatch for the interactor.
//!
//! Uses an actor pattern to ensure all collection mutations are serialized:
//! - Intents are sent via an mpsc channel
//! - A dedicated task owns the interactor and processes intents sequentially
//!
//! A surface that drives everything from one task can call the interactor
//! directly; this handle exists for surfaces that may issue intents from
//! more than one place at once, so a fetch awaiting its response can never
//! interleave with an add or delete.

use crate::error::interactor::InteractorError;
use crate::location_service::LocationService;
use crate::models::{Coordinate, Location};

use super::PlacesInteractor;

use common::ErrorLocation;

use std::collections::BTreeSet;

use log::info;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const INTENT_QUEUE_DEPTH: usize = 100;

/// Intents a calling surface may send to the interactor.
///
/// One variant per operation in the business-logic contract.
#[derive(Debug, Clone)]
pub enum PlacesIntent {
    /// Fetch the feed and replace the owned collection.
    FetchLocations,

    /// Append a new location at the given coordinate and select it.
    AddLocation {
        name: String,
        coordinate: Coordinate,
    },

    /// Remove the entries at the given positions and clear the selection.
    DeleteLocations { offsets: BTreeSet<usize> },

    /// Record the given location as the current selection.
    SelectLocation(Location),

    /// Ask the display surface to deep-link into Wikipedia.
    OpenWikipedia(Location),
}

/// Handle to a running interactor worker.
///
/// `Clone`-free by design: the surface that spawned the worker decides when
/// it shuts down. Dropping the handle without calling [`close`](Self::close)
/// stops the worker after the queued intents drain, but without waiting for
/// them.
pub struct PlacesHandle {
    intent_tx: mpsc::Sender<PlacesIntent>,
    worker: JoinHandle<()>,
}

impl PlacesHandle {
    /// Move the interactor onto a dedicated worker task and return the
    /// handle intents are sent through.
    pub fn spawn<S>(interactor: PlacesInteractor<S>) -> Self
    where
        S: LocationService + Send + 'static,
    {
        let (intent_tx, intent_rx) = mpsc::channel(INTENT_QUEUE_DEPTH);
        let worker = tokio::spawn(intent_loop(intent_rx, interactor));
        Self { intent_tx, worker }
    }

    /// Enqueue one intent.
    ///
    /// Intents are processed strictly in send order. Completes once the
    /// intent is queued, not once it is processed; await [`close`](Self::close)
    /// for a full drain.
    ///
    /// # Errors
    ///
    /// Returns [`InteractorError::IntentChannelClosed`] if the worker task is
    /// gone.
    pub async fn send(&self, intent: PlacesIntent) -> Result<(), InteractorError> {
        self.intent_tx
            .send(intent)
            .await
            .map_err(|error| InteractorError::IntentChannelClosed {
                message: format!("Intent worker died: {error}"),
                location: ErrorLocation::caller(),
            })
    }

    /// Stop accepting intents and wait until everything queued has been
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns [`InteractorError::IntentChannelClosed`] if the worker
    /// panicked.
    pub async fn close(self) -> Result<(), InteractorError> {
        drop(self.intent_tx);
        self.worker
            .await
            .map_err(|error| InteractorError::IntentChannelClosed {
                message: format!("Intent worker panicked: {error}"),
                location: ErrorLocation::caller(),
            })
    }
}

/// The worker task.
///
/// Owns the interactor and processes intents until the channel closes, which
/// happens when the handle is dropped or closed. Because the fetch await
/// happens inside this loop, no other intent can observe or mutate the
/// collection while a fetch is in flight.
async fn intent_loop<S>(
    mut intent_rx: mpsc::Receiver<PlacesIntent>,
    mut interactor: PlacesInteractor<S>,
) where
    S: LocationService + Send,
{
    info!("Places intent worker started");

    while let Some(intent) = intent_rx.recv().await {
        match intent {
            PlacesIntent::FetchLocations => interactor.fetch_locations().await,
            PlacesIntent::AddLocation { name, coordinate } => {
                interactor.add_location(&name, coordinate);
            }
            PlacesIntent::DeleteLocations { offsets } => {
                interactor.delete_locations(&offsets);
            }
            PlacesIntent::SelectLocation(location) => interactor.select_location(location),
            PlacesIntent::OpenWikipedia(location) => interactor.open_wikipedia(&location),
        }
    }

    info!("Places intent worker stopped");
}
