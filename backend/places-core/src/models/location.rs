use serde::Deserialize;
use uuid::Uuid;

/// A named point on the map.
///
/// The feed carries no identifier, so `id` is assigned locally at decode time
/// (or at construction for user-added entries) and never round-trips to the
/// wire. `name`, `latitude`, and `longitude` may all be absent in feed
/// entries; locally added entries always have a name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Location {
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "lat", default)]
    pub latitude: Option<f64>,

    #[serde(rename = "long", default)]
    pub longitude: Option<f64>,
}

impl Location {
    /// Build a user-added location with a fresh identifier.
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: Some(name.into()),
            latitude: Some(coordinate.latitude),
            longitude: Some(coordinate.longitude),
        }
    }

    /// The coordinate pair, if both components are present.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// A latitude/longitude pair, e.g. the current map center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Decode-only envelope around the feed's location array.
///
/// Exists only while deserializing a response body; never retained as state.
#[derive(Debug, Deserialize)]
pub struct LocationsWrapper {
    pub locations: Vec<Location>,
}
