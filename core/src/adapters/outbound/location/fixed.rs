use restomap_common::location::{Accuracy, Coordinates, PermissionStatus};

use crate::ports::outbound::location_provider::{LocationError, LocationProvider};

/// Answers the permission request and the position request from fixed values.
#[derive(Debug, Clone)]
pub struct FixedLocationProvider {
    status: PermissionStatus,
    position: Option<Coordinates>,
}

impl FixedLocationProvider {
    pub fn granted(position: Coordinates) -> Self {
        Self {
            status: PermissionStatus::Granted,
            position: Some(position),
        }
    }

    pub fn denied() -> Self {
        Self {
            status: PermissionStatus::Denied,
            position: None,
        }
    }
}

#[async_trait::async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_foreground_permission(&self) -> PermissionStatus {
        self.status
    }

    async fn current_position(&self, _accuracy: Accuracy) -> Result<Coordinates, LocationError> {
        self.position
            .ok_or_else(|| LocationError::Unavailable("no position configured".to_string()))
    }
}
