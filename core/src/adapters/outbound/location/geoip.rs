use std::time::Duration;

use restomap_common::location::{Accuracy, Coordinates, PermissionStatus};
use serde::Deserialize;
use tracing::debug;

use crate::ports::outbound::location_provider::{LocationError, LocationProvider};

/// Reply of an ip-api.com compatible lookup service.
#[derive(Debug, Deserialize)]
struct GeoIpReply {
    status: String,
    #[serde(default)]
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl GeoIpReply {
    fn into_coordinates(self) -> Result<Coordinates, LocationError> {
        if self.status != "success" {
            let reason = self.message.unwrap_or(self.status);
            return Err(LocationError::Unavailable(reason));
        }

        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)),
            _ => Err(LocationError::Unavailable(
                "lookup reply carries no coordinates".to_string(),
            )),
        }
    }
}

/// Approximates the device position from its public IP address.
///
/// Running the lookup at all is the user's opt-in, so the permission request is
/// always granted. The requested accuracy cannot be honored and is ignored.
pub struct GeoIpLocationProvider {
    client: reqwest::Client,
    endpoint: String,
}

impl GeoIpLocationProvider {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LocationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LocationError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait::async_trait]
impl LocationProvider for GeoIpLocationProvider {
    async fn request_foreground_permission(&self) -> PermissionStatus {
        PermissionStatus::Granted
    }

    async fn current_position(&self, accuracy: Accuracy) -> Result<Coordinates, LocationError> {
        debug!("GeoIP lookup at {} (requested {accuracy:?} accuracy)", self.endpoint);

        let reply: GeoIpReply = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| LocationError::Transport(e.to_string()))?
            .json()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        reply.into_coordinates()
    }
}
