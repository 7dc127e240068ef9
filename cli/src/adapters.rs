//! Builds the outbound adapters the screen is mounted with.

use std::sync::Arc;

use restomap_common::config::{Config, LocationSettings};
use restomap_core::adapters::outbound::http_source::HttpRestaurantSource;
use restomap_core::adapters::outbound::location::fixed::FixedLocationProvider;
use restomap_core::adapters::outbound::location::geoip::GeoIpLocationProvider;
use restomap_core::ports::outbound::location_provider::LocationProvider;
use restomap_core::ports::outbound::restaurant_source::RestaurantSource;
use tracing::debug;

pub fn restaurant_source(cfg: &Config) -> anyhow::Result<Arc<dyn RestaurantSource>> {
    let source = HttpRestaurantSource::new(&cfg.endpoint, cfg.request_timeout)?;
    debug!("Restaurants will be fetched from {}", source.endpoint());
    Ok(Arc::new(source))
}

pub fn location_provider(cfg: &Config) -> anyhow::Result<Arc<dyn LocationProvider>> {
    let provider: Arc<dyn LocationProvider> = match &cfg.location {
        LocationSettings::Fixed(coordinates) => {
            Arc::new(FixedLocationProvider::granted(*coordinates))
        }
        LocationSettings::Denied => Arc::new(FixedLocationProvider::denied()),
        LocationSettings::GeoIp { endpoint } => {
            Arc::new(GeoIpLocationProvider::new(endpoint.as_str(), cfg.request_timeout)?)
        }
    };
    Ok(provider)
}
