//! The fetch client for the locations feed.
//!
//! One HTTP GET against a fixed endpoint, one decode, no retries and no
//! caching. The [`LocationService`] trait is the seam the interactor is
//! generic over, so tests substitute a canned implementation.

use crate::error::location_service::LocationServiceError;
use crate::models::{Location, LocationsWrapper};

use common::{ErrorLocation, HttpStatusCode};

use std::future::Future;
use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Fetches the full location list from the feed.
///
/// The returned future resolves with the decoded entries in feed order, or
/// with the first transport/status/decode failure. Implementations perform no
/// shared-state mutation; the caller owns what happens to the result.
pub trait LocationService {
    fn fetch_locations(
        &self,
    ) -> impl Future<Output = Result<Vec<Location>, LocationServiceError>> + Send;
}

/// `LocationService` backed by a real HTTP client.
///
/// Production code points this at [`crate::LOCATIONS_FEED_URL`]; tests point
/// it at a mock server.
#[derive(Clone, Debug)]
pub struct HttpLocationService {
    url: Url,
    client: Client,
}

impl HttpLocationService {
    pub fn new(url: &str) -> Result<Self, LocationServiceError> {
        let url = Url::parse(url)?;
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()?;

        Ok(Self { url, client })
    }
}

impl LocationService for HttpLocationService {
    async fn fetch_locations(&self) -> Result<Vec<Location>, LocationServiceError> {
        debug!("Fetching locations from {}", self.url);

        let response = self.client.get(self.url.clone()).send().await?;

        let status = HttpStatusCode(response.status().as_u16());
        if !status.is_success() {
            return Err(LocationServiceError::Server {
                status,
                message: response.text().await.unwrap_or_default(),
                location: ErrorLocation::caller(),
            });
        }

        // Decode in two steps so a malformed body is reported as a JSON
        // error rather than folded into the transport error.
        let body = response.text().await?;
        let wrapper: LocationsWrapper = serde_json::from_str(&body)?;

        // Entries without a name are kept; the display surface decides how
        // to label them. Each entry gets a fresh local id during decode.
        info!("Fetched {} locations", wrapper.locations.len());
        Ok(wrapper.locations)
    }
}
