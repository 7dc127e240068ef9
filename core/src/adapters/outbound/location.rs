//! Location providers for hosts without a platform geolocation service.
//!
//! * [`fixed::FixedLocationProvider`]: a scripted permission answer and position.
//! * [`geoip::GeoIpLocationProvider`]: approximates the position from the public IP.

pub mod fixed;
pub mod geoip;
