pub mod browse;
pub mod search;

use std::time::Duration;

use clap::{Parser, Subcommand};
use restomap_common::config::{
    Config, DEFAULT_ENDPOINT, DEFAULT_GEOIP_ENDPOINT, DEFAULT_REQUEST_TIMEOUT, LocationSettings,
};
use restomap_common::location::Coordinates;

#[derive(Parser)]
#[command(name = "restomap")]
#[command(about = "Restaurants around you, searchable from the terminal.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// URL serving the restaurant list as a JSON array
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Latitude of the current position (requires --lon)
    #[arg(long, global = true, requires = "lon", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of the current position (requires --lat)
    #[arg(long, global = true, requires = "lat", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// Refuse the location permission request
    #[arg(long, global = true, conflicts_with_all = ["lat", "lon"])]
    pub deny_location: bool,

    /// Service used to approximate the position when no coordinates are given
    #[arg(long, global = true, default_value = DEFAULT_GEOIP_ENDPOINT)]
    pub geoip_endpoint: String,

    /// Timeout of each HTTP request, in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_REQUEST_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Print less (-q drops decorations, -qq prints only restaurant names)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the screen and filter it with each line typed (default)
    #[command(alias = "b")]
    Browse,
    /// Load everything once, filter by QUERY and print the result
    #[command(alias = "s")]
    Search {
        query: String,
        /// Seconds to wait for the list and the location before printing
        #[arg(long, default_value_t = 15)]
        settle_timeout: u64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let location = match (self.deny_location, self.lat, self.lon) {
            (true, _, _) => LocationSettings::Denied,
            (false, Some(lat), Some(lon)) => LocationSettings::Fixed(Coordinates::new(lat, lon)),
            _ => LocationSettings::GeoIp {
                endpoint: self.geoip_endpoint.clone(),
            },
        };

        Config {
            endpoint: self.endpoint.clone(),
            request_timeout: Duration::from_secs(self.timeout),
            location,
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
    }
}
