//! Wikipedia deep-link construction.
//!
//! The display surface owns the deep link: the pipeline only reports the
//! intent to open a location externally. Failures to open are never
//! reported back into the pipeline.

use places_core::models::Location;

use url::Url;

const WIKIPEDIA_PLACES_BASE: &str = "wikipedia://places";

/// Build the `wikipedia://places` deep link for one location.
///
/// Query parameters are `WMFLatitude` and `WMFLongitude`, the names the
/// Wikipedia app expects. A missing coordinate component falls back to `0`.
pub fn deep_link(location: &Location) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(WIKIPEDIA_PLACES_BASE)?;
    url.query_pairs_mut()
        .append_pair(
            "WMFLatitude",
            &location.latitude.unwrap_or(0.0).to_string(),
        )
        .append_pair(
            "WMFLongitude",
            &location.longitude.unwrap_or(0.0).to_string(),
        );
    Ok(url)
}
