use std::time::Duration;

use restomap_common::restaurant::{self, RestaurantRecord};
use tracing::debug;

use crate::ports::outbound::restaurant_source::{FetchError, RestaurantSource};

/// Fetches the restaurant array with a single GET.
///
/// The status code is not inspected: whatever body comes back must decode as a
/// JSON array, or the fetch fails with [`FetchError::Decode`].
pub struct HttpRestaurantSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRestaurantSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl RestaurantSource for HttpRestaurantSource {
    async fn fetch_restaurants(&self) -> Result<Vec<RestaurantRecord>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;
        debug!("GET {} -> {}", self.endpoint, response.status());

        let body = response.bytes().await?;
        Ok(restaurant::decode_array(&body)?)
    }
}
