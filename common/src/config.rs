use std::time::Duration;

use crate::location::Coordinates;

/// Remote endpoint serving the restaurant array.
pub const DEFAULT_ENDPOINT: &str =
    "https://my-json-server.typicode.com/blacky-yg/frontend-dev-hiring-test/restos";

/// Remote endpoint used to approximate the device position from its public IP.
pub const DEFAULT_GEOIP_ENDPOINT: &str = "http://ip-api.com/json";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Config {
    /// Where the restaurant list is fetched from.
    pub endpoint: String,
    /// Upper bound for each outbound HTTP request.
    ///
    /// Requests that exceed it fail like any other transport error; nothing is retried.
    pub request_timeout: Duration,
    pub location: LocationSettings,
    /// 0 prints everything, 1 drops decorations, 2 prints only the list.
    pub quiet: u8,
    pub no_banner: bool,
}

/// How the front-end answers the location capability.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationSettings {
    /// Permission granted, position is the given fix.
    Fixed(Coordinates),
    /// Permission refused by the user.
    Denied,
    /// Permission granted, position looked up from the public IP.
    GeoIp { endpoint: String },
}
