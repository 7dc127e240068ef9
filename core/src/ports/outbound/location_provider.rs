use restomap_common::location::{Accuracy, Coordinates, PermissionStatus};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    /// The platform answered but could not produce a fix.
    #[error("position unavailable: {0}")]
    Unavailable(String),
    /// The platform could not be reached at all.
    #[error("location lookup failed: {0}")]
    Transport(String),
}

/// The device geolocation capability.
///
/// Both calls are one-shot; the screen never polls or subscribes.
#[async_trait::async_trait]
pub trait LocationProvider: Send + Sync {
    /// Asks the user for foreground location access.
    async fn request_foreground_permission(&self) -> PermissionStatus;

    /// Resolves the current position once. Only called after a granted permission.
    async fn current_position(&self, accuracy: Accuracy) -> Result<Coordinates, LocationError>;
}
