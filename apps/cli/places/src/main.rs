use places::cli::{Cli, Command};
use places::display::TerminalDisplay;
use places::error::PlacesAppError;
use places::logger::initialize as logger_initialize;
use places::validation::is_valid_location_name;

use places_core::display::PlacesDisplayLogic;
use places_core::interactor::{PlacesHandle, PlacesInteractor, PlacesIntent};
use places_core::location_service::HttpLocationService;
use places_core::models::Coordinate;
use places_core::presenter::PlacesPresenter;

use common::ErrorLocation;

use std::sync::{Arc, Weak};

use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> Result<(), PlacesAppError> {
    let cli = Cli::parse();

    logger_initialize(&std::env::temp_dir())?;
    info!("Places starting");

    // Wire the pipeline: display <- presenter <- interactor <- service.
    // The presenter holds a non-owning reference; the display lives here.
    let display = Arc::new(TerminalDisplay::default());
    let view = Arc::downgrade(&display) as Weak<dyn PlacesDisplayLogic>;
    let presenter = PlacesPresenter::new(view);
    let service = HttpLocationService::new(&cli.feed_url)?;
    let interactor = PlacesInteractor::new(service, Box::new(presenter));
    let places = PlacesHandle::spawn(interactor);

    let mut updates = display.updates();
    places.send(PlacesIntent::FetchLocations).await?;

    match cli.command {
        Command::Fetch => {}
        Command::Add { name, lat, long } => {
            // Surface-side precondition: the interactor assumes a usable
            // name, the way the add sheet disables its button until the
            // field is non-empty.
            if !is_valid_location_name(&name) {
                return Err(PlacesAppError::InvalidInput {
                    message: String::from("location name must not be empty"),
                    location: ErrorLocation::caller(),
                });
            }
            places
                .send(PlacesIntent::AddLocation {
                    name,
                    coordinate: Coordinate {
                        latitude: lat,
                        longitude: long,
                    },
                })
                .await?;
        }
        Command::Open { index } => {
            // The open intent needs a concrete location, so wait for the
            // fetch outcome to reach the display before looking it up.
            let _ = updates.changed().await;
            let Some(location) = display.location_at(index) else {
                return Err(PlacesAppError::InvalidInput {
                    message: format!(
                        "no location at index {index} ({} fetched)",
                        display.location_count()
                    ),
                    location: ErrorLocation::caller(),
                });
            };
            places
                .send(PlacesIntent::SelectLocation(location.clone()))
                .await?;
            places.send(PlacesIntent::OpenWikipedia(location)).await?;
        }
    }

    // Drain the intent queue, then render the final snapshot.
    places.close().await?;
    display.render();

    Ok(())
}
