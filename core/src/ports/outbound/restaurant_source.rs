use restomap_common::restaurant::RestaurantRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("response is not a restaurant array: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Request(e.to_string())
    }
}

/// Where the restaurant list comes from.
#[async_trait::async_trait]
pub trait RestaurantSource: Send + Sync {
    /// Fetches the whole list in one request.
    async fn fetch_restaurants(&self) -> Result<Vec<RestaurantRecord>, FetchError>;
}
