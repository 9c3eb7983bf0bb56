use clap::{Parser, Subcommand};

use places_core::LOCATIONS_FEED_URL;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Cli {
    /// Feed endpoint. Defaults to the bundled locations feed.
    #[clap(long, default_value = LOCATIONS_FEED_URL)]
    pub feed_url: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the feed and list the locations.
    #[clap(alias = "list")]
    Fetch,

    /// Fetch the feed, then add a location at the given map center.
    Add {
        /// Name for the new location. Must be non-empty after trimming.
        name: String,

        /// Latitude of the map center.
        #[clap(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude of the map center.
        #[clap(long, allow_negative_numbers = true)]
        long: f64,
    },

    /// Fetch the feed and open one entry externally via its Wikipedia deep
    /// link.
    Open {
        /// Zero-based position in the fetched list.
        index: usize,
    },
}
