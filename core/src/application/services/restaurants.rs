use std::sync::Arc;

use restomap_common::restaurant::RestaurantRecord;
use tracing::debug;

use crate::ports::outbound::restaurant_source::{FetchError, RestaurantSource};

pub struct RestaurantLoader {
    source: Arc<dyn RestaurantSource>,
}

impl RestaurantLoader {
    pub fn new(source: Arc<dyn RestaurantSource>) -> Self {
        Self { source }
    }

    /// Issues the one restaurant request. Failures are returned, never retried.
    pub async fn load(&self) -> Result<Vec<RestaurantRecord>, FetchError> {
        debug!("Fetching restaurant list");
        self.source.fetch_restaurants().await
    }
}
