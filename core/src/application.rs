//! # Application Layer (Service Layer)
//!
//! Runs the screen's use cases on top of the domain and the outbound ports.
//!
//! ## Contents
//! * **[`services`]**: the location flow, the restaurant flow and the screen event loop.

pub mod services;
