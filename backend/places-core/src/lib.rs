pub mod display;
pub mod error;
pub mod interactor;
pub mod location_service;
pub mod models;
pub mod presenter;

#[cfg(test)]
mod tests;

pub const LOCATIONS_FEED_HOSTNAME: &str = "raw.githubusercontent.com";
pub const LOCATIONS_FEED_URL: &str = const_format::concatcp!(
    "https://",
    LOCATIONS_FEED_HOSTNAME,
    "/abnamrocoesd/assignment-ios/main/locations.json"
);
