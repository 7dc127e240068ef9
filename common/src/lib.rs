//! Models and configuration shared by every `restomap` crate.
//!
//! * [`restaurant`]: the opaque restaurant record as received from the remote source.
//! * [`location`]: coordinates, map viewport region and permission vocabulary.
//! * [`config`]: runtime settings assembled by the front-end.

pub mod config;
pub mod location;
pub mod restaurant;
