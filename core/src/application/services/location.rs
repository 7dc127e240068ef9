use std::sync::Arc;

use restomap_common::location::{Accuracy, Coordinates};
use tracing::{debug, info};

use crate::ports::outbound::location_provider::{LocationError, LocationProvider};

/// How the location flow ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationOutcome {
    Resolved(Coordinates),
    PermissionDenied,
    Failed(LocationError),
}

pub struct LocationResolver {
    provider: Arc<dyn LocationProvider>,
}

impl LocationResolver {
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        Self { provider }
    }

    /// Asks for permission, then for one high-accuracy fix.
    ///
    /// A denied permission stops the flow before any position request is made.
    pub async fn resolve(&self) -> LocationOutcome {
        let status = self.provider.request_foreground_permission().await;
        debug!("Location permission: {status:?}");

        if !status.is_granted() {
            return LocationOutcome::PermissionDenied;
        }

        match self.provider.current_position(Accuracy::High).await {
            Ok(coordinates) => {
                info!("Current location resolved at {coordinates}");
                LocationOutcome::Resolved(coordinates)
            }
            Err(e) => LocationOutcome::Failed(e),
        }
    }
}
