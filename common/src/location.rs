//! # Location Model
//!
//! Value objects produced by the location flow and consumed by the map viewport.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Vertical span of the initial map viewport, in degrees.
pub const LATITUDE_DELTA: f64 = 0.0922;
/// Horizontal span of the initial map viewport, in degrees.
pub const LONGITUDE_DELTA: f64 = 0.0421;

/// A one-time captured device position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Initial map viewport centered on these coordinates.
    pub fn region(&self) -> MapRegion {
        MapRegion {
            latitude: self.latitude,
            longitude: self.longitude,
            latitude_delta: LATITUDE_DELTA,
            longitude_delta: LONGITUDE_DELTA,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

/// The region handed to the map widget when it is first shown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Answer of the host platform to a foreground location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

/// Requested precision for a position fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accuracy {
    Low,
    Balanced,
    #[default]
    High,
}
