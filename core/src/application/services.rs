//! # Application Services
//!
//! * [`location::LocationResolver`]: permission request followed by a one-shot position fix.
//! * [`restaurants::RestaurantLoader`]: the single restaurant fetch.
//! * [`screen::RestaurantScreen`]: mounts both flows and applies their results, and the
//!   user's queries, to the screen state on one event queue.
//!
//! Services only know the ports. *How* a position or a list is obtained is up to the
//! adapters handed to them.

pub mod location;
pub mod restaurants;
pub mod screen;
