//! # Restomap Core
//!
//! `restomap-core` is the headless engine of the restaurant list screen, laid out as a
//! **Hexagonal Architecture**.
//!
//! ## Architecture Overview
//! * **[`domain`]**: Screen state, its transitions, the search filter and the composed view.
//!   Pure Rust, no IO.
//!     * *Center of the Hexagon*.
//! * **[`application`]**: Services that run the location and restaurant flows and the
//!   screen event loop.
//!     * *Application Layer*.
//! * **[`ports`]**: Traits for the capabilities the screen consumes (geolocation,
//!   restaurant source, rendering surface, detail renderer).
//!     * *Boundaries of the Hexagon*.
//! * **[`adapters`]**: Concrete implementations of the outbound ports (HTTP, location).
//!     * *Outside the Hexagon*.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
