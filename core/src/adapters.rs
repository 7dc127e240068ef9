//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the [`crate::ports`] that talk to the network.
//!
//! * **[`outbound`]**: the HTTP restaurant source and the location providers.
//!
//! Drawing adapters live with the front-end that owns the terminal.

pub mod outbound;
