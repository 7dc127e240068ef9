//! # Ports Layer (Boundaries)
//!
//! Interfaces (traits) that isolate the screen from the platform it runs on.
//!
//! ## Types of Ports
//! * **[`inbound`]** (Primary/Driving): how the outside drives the screen.
//! * **[`outbound`]** (Secondary/Driven): capabilities the screen consumes (geolocation,
//!   restaurant source, drawing).
//!
//! ## Dependency Rule
//! * The Application depends on these Ports.
//! * The Adapters implement these Ports.

pub mod inbound;
pub mod outbound;
