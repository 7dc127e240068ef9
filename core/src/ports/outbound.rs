//! # Outbound Ports (Driven Actors)
//!
//! Contracts for the capabilities the screen requests from its host.
//!
//! ## Rules
//! 1. All items here are traits (plus the error types in their signatures).
//! 2. No concrete implementations; those live in `adapters/outbound` or in the front-end.
//! 3. Signatures speak in `restomap_common` models.

pub mod location_provider;
pub mod restaurant_source;
pub mod surface;
