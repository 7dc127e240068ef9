//! # Screen State
//!
//! The five pieces of state owned by one restaurant screen, and the only functions
//! allowed to change them. Every transition keeps `displayed ⊆ canonical`, with
//! `displayed` sharing `canonical` whenever the query is empty.

use std::sync::Arc;

use restomap_common::location::Coordinates;
use restomap_common::restaurant::RestaurantRecord;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::domain::filter::filter;
use crate::ports::outbound::location_provider::LocationError;
use crate::ports::outbound::restaurant_source::FetchError;

/// User-facing error recorded by the location flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScreenError {
    #[error("Permission to access location was denied")]
    PermissionDenied,
    #[error("Unable to resolve current location: {0}")]
    PositionUnavailable(String),
}

#[derive(Debug, Clone)]
pub struct ScreenState {
    query: String,
    canonical: Arc<[RestaurantRecord]>,
    displayed: Arc<[RestaurantRecord]>,
    coordinates: Option<Coordinates>,
    error: Option<ScreenError>,
}

impl Default for ScreenState {
    fn default() -> Self {
        let empty: Arc<[RestaurantRecord]> = Arc::from(Vec::new());
        Self {
            query: String::new(),
            canonical: Arc::clone(&empty),
            displayed: empty,
            coordinates: None,
            error: None,
        }
    }
}

impl ScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `query` and recomputes the displayed dataset from scratch.
    pub fn apply_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self.displayed = filter(&self.query, &self.canonical);
        self
    }

    /// Stores a successful fetch as the canonical dataset.
    ///
    /// A failed fetch is logged and leaves both datasets as they were.
    pub fn apply_fetch_result(mut self, result: Result<Vec<RestaurantRecord>, FetchError>) -> Self {
        match result {
            Ok(records) => {
                info!("Loaded {} restaurants", records.len());
                self.canonical = Arc::from(records);
                self.displayed = filter(&self.query, &self.canonical);
            }
            Err(e) => {
                error!("Failed to load restaurants: {e}");
            }
        }
        self
    }

    pub fn apply_location(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn apply_permission_denied(mut self) -> Self {
        warn!("{}", ScreenError::PermissionDenied);
        self.error = Some(ScreenError::PermissionDenied);
        self
    }

    /// Permission was granted but no position could be obtained.
    ///
    /// Coordinates stay unresolved, so the map keeps its loading indicator.
    pub fn apply_position_failure(mut self, failure: LocationError) -> Self {
        let screen_error = ScreenError::PositionUnavailable(failure.to_string());
        error!("{screen_error}");
        self.error = Some(screen_error);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn canonical(&self) -> &Arc<[RestaurantRecord]> {
        &self.canonical
    }

    pub fn displayed(&self) -> &Arc<[RestaurantRecord]> {
        &self.displayed
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    pub fn error(&self) -> Option<&ScreenError> {
        self.error.as_ref()
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
